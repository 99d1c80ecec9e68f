// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    aar_uploader_lib::init_logging();
    aar_uploader_lib::run()
}
