#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    skill_panel_lib::run()
}
