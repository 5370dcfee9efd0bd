use super::*;
use launcher_host::AppHostOperation;
use serde::{de::DeserializeOwned, Serialize};
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], js_name = invoke, catch)]
    async fn tauri_invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AppIconArgs<'a> {
    app_path: &'a str,
}

#[derive(Serialize)]
struct LaunchArgs<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct SaveConfigArgs<'a> {
    path: &'a str,
    category: &'a str,
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

fn to_js_args<T: Serialize>(args: &T) -> Result<JsValue, String> {
    args.serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string())
}

async fn invoke(operation: AppHostOperation, args: JsValue) -> Result<JsValue, String> {
    let command = operation.command();
    tauri_invoke(command, args)
        .await
        .map_err(|err| format!("{command}: {}", js_error_to_string(err)))
}

async fn invoke_json<T: DeserializeOwned>(
    operation: AppHostOperation,
    args: JsValue,
) -> Result<T, String> {
    let value = invoke(operation, args).await?;
    from_value(value).map_err(|e| format!("{}: {e}", operation.command()))
}

pub async fn list_apps() -> Result<Vec<ApplicationRecord>, String> {
    invoke_json(AppHostOperation::ListApps, js_sys::Object::new().into()).await
}

pub async fn app_icon(launch_path: &str) -> Result<Option<IconPayload>, String> {
    let args = to_js_args(&AppIconArgs {
        app_path: launch_path,
    })?;
    let value = invoke(AppHostOperation::AppIcon, args).await?;
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    from_value(value)
        .map(Some)
        .map_err(|e| format!("{}: {e}", AppHostOperation::AppIcon.command()))
}

pub async fn launch_app(launch_path: &str) -> Result<(), String> {
    let args = to_js_args(&LaunchArgs { path: launch_path })?;
    invoke(AppHostOperation::LaunchApp, args).await.map(|_| ())
}

pub async fn save_app_category(launch_path: &str, category: &str) -> Result<(), String> {
    let args = to_js_args(&SaveConfigArgs {
        path: launch_path,
        category,
    })?;
    invoke(AppHostOperation::SaveAppCategory, args)
        .await
        .map(|_| ())
}
