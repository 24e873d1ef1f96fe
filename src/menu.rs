use gpui::*;

use crate::grid::{ClearGrid, CopyJson, ExportJson, Quit};

/// Set up the application menu bar
pub fn setup_menu(cx: &mut App) {
    cx.set_menus(vec![
        Menu {
            name: "zgraph".into(),
            items: vec![
                MenuItem::action("About zgraph", About),
                MenuItem::separator(),
                MenuItem::action("Quit", Quit),
            ],
        },
        Menu {
            name: "Graph".into(),
            items: vec![
                MenuItem::action("Export JSON", ExportJson),
                MenuItem::action("Copy JSON", CopyJson),
                MenuItem::separator(),
                MenuItem::action("Clear", ClearGrid),
            ],
        },
    ]);
}

// Menu-specific actions that don't fit elsewhere
actions!(menu, [About]);
