// Task-Modul: Enthält den Embassy Task der Steuerschleife
//
// Ein einziger Task besitzt den gesamten Zustand (Menü, Bedingungen, LEDs).

pub mod access_control;

// Re-export Tasks für einfachen Import
pub use access_control::access_control_task;
