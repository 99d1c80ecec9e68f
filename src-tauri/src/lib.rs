pub mod api;
pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

/// Install the `env_logger` backend for the `log` facade.
///
/// Defaults to `info`; `RUST_LOG` overrides. Safe to call more than once.
pub fn init_logging() {
    if env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("info"))
        .try_init()
        .is_err()
    {
        log::debug!("Logger already installed; keeping it");
    }
}

#[cfg(feature = "desktop")]
fn on_drop(window: &tauri::Window, paths: Vec<std::path::PathBuf>) {
    use tauri::Manager;

    let controller = window
        .state::<commands::upload::UploadState>()
        .controller
        .clone();
    tauri::async_runtime::spawn(async move {
        if let Err(e) = commands::upload::apply_selection(&controller, paths).await {
            log::warn!("Ignoring dropped paths: {}", e);
        }
    });
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use tauri::Manager;

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_store::Builder::new().build())
        .setup(|app| {
            let upload_state = commands::upload::UploadState::new(app.handle())?;
            app.manage(upload_state);
            log::info!("Upload form ready");
            Ok(())
        })
        .on_window_event(|window, event| {
            if let tauri::WindowEvent::DragDrop(tauri::DragDropEvent::Drop { paths, .. }) = event {
                on_drop(window, paths.clone());
            }
        })
        .invoke_handler(tauri::generate_handler![
            commands::files::resolve_dropped_paths,
            commands::upload::select_files,
            commands::upload::submit_upload,
            commands::config::get_settings,
            commands::config::save_settings,
            commands::config::list_partners,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
