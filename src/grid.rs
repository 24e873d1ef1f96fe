use gpui::prelude::FluentBuilder;
use gpui::*;

use crate::Theme;
use crate::dates::DateMapper;
use crate::export;
use crate::state::{CellPosition, GRID_CELLS, GRID_COLS, GRID_ROWS, GridEditor};

pub const CELL_SIZE: f32 = 14.0;
pub const CELL_GAP: f32 = 4.0;
pub const DAY_LABEL_WIDTH: f32 = 36.0;
pub const HEADER_HEIGHT: f32 = 40.0;
pub const FOOTER_HEIGHT: f32 = 24.0;
pub const PANEL_PADDING: f32 = 16.0;
pub const RESULT_PANE_HEIGHT: f32 = 180.0;

pub const GRID_WIDTH: f32 = DAY_LABEL_WIDTH + GRID_COLS as f32 * (CELL_SIZE + CELL_GAP) - CELL_GAP;
pub const GRID_HEIGHT: f32 = GRID_ROWS as f32 * (CELL_SIZE + CELL_GAP) - CELL_GAP;

// Minimum window size: header + grid + footer (height) and the full grid
// with its padding (width); the result pane only shows when there is room.
pub const MIN_WINDOW_WIDTH: f32 = GRID_WIDTH + 2.0 * PANEL_PADDING;
pub const MIN_WINDOW_HEIGHT: f32 = HEADER_HEIGHT + GRID_HEIGHT + FOOTER_HEIGHT + 2.0 * PANEL_PADDING;

pub const WINDOW_WIDTH: f32 = MIN_WINDOW_WIDTH + 24.0;
pub const WINDOW_HEIGHT: f32 = MIN_WINDOW_HEIGHT + RESULT_PANE_HEIGHT + 40.0;

const DAYS_OF_WEEK: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// Editor actions
actions!(graph, [ExportJson, CopyJson, ClearGrid]);

// Global actions
actions!(zgraph, [Quit]);

/// The main application component
pub struct GraphApp {
    grid: Entity<ContributionGrid>,
}

impl GraphApp {
    pub fn new(year: i32, cx: &mut Context<Self>) -> Self {
        let grid = cx.new(|cx| ContributionGrid::new(year, cx));
        Self { grid }
    }
}

impl Render for GraphApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(theme.base)
            .text_color(theme.text)
            .font_family("Berkeley Mono")
            .child(self.grid.clone())
    }
}

/// The contribution grid component
pub struct ContributionGrid {
    focus_handle: FocusHandle,
    editor: GridEditor,
    mapper: DateMapper,
    result_json: Option<SharedString>,
    status: Option<SharedString>,
}

impl ContributionGrid {
    pub fn new(year: i32, cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            editor: GridEditor::new(),
            mapper: DateMapper::new(year),
            result_json: None,
            status: None,
        }
    }

    // Actions

    fn export_json(&mut self, _: &ExportJson, _window: &mut Window, cx: &mut Context<Self>) {
        match export::to_json(self.editor.grid(), &self.mapper) {
            Ok(json) => {
                log::info!("exported {} days for {}", GRID_CELLS, self.mapper.year());
                self.result_json = Some(json.into());
                self.status = Some(format!("Exported {} days", GRID_CELLS).into());
            }
            Err(e) => {
                log::error!("failed to serialize grid: {e}");
                self.status = Some("Export failed".into());
            }
        }
        cx.notify();
    }

    fn copy_json(&mut self, _: &CopyJson, _window: &mut Window, cx: &mut Context<Self>) {
        let Some(json) = self.result_json.clone() else {
            self.status = Some("Nothing to copy yet".into());
            cx.notify();
            return;
        };

        cx.write_to_clipboard(ClipboardItem::new_string(json.to_string()));

        // Read back to confirm the write landed; some hosts deny clipboard
        // access, and that must not take the export text with it.
        let copied = cx
            .read_from_clipboard()
            .and_then(|item| item.text())
            .is_some_and(|text| text == *json);
        if copied {
            self.status = Some("Copied to clipboard".into());
        } else {
            log::warn!("clipboard write could not be confirmed");
            self.status = Some("Could not copy to clipboard".into());
        }
        cx.notify();
    }

    fn clear_grid(&mut self, _: &ClearGrid, _window: &mut Window, cx: &mut Context<Self>) {
        self.editor = GridEditor::new();
        self.status = Some("Grid cleared".into());
        cx.notify();
    }

    // Pointer events

    fn on_cell_mouse_down(&mut self, pos: CellPosition, window: &mut Window, cx: &mut Context<Self>) {
        self.focus_handle.focus(window, cx);
        self.editor.pointer_down(pos);
        cx.notify();
    }

    fn on_cell_mouse_move(&mut self, pos: CellPosition, cx: &mut Context<Self>) {
        // Move events repeat while the pointer rests on a cell.
        if self.editor.hovered() == Some(pos) && !self.editor.is_drawing() {
            return;
        }
        self.editor.pointer_enter(pos);
        cx.notify();
    }

    fn on_mouse_up(&mut self, cx: &mut Context<Self>) {
        if self.editor.is_drawing() {
            self.editor.pointer_up();
            cx.notify();
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let export_target = cx.entity().clone();
        let hovered = self
            .editor
            .hovered()
            .map(|pos| self.mapper.hover_label(pos));

        div()
            .flex()
            .flex_row()
            .w_full()
            .h(px(HEADER_HEIGHT))
            .bg(theme.mantle)
            .border_b_1()
            .border_color(theme.surface0)
            .items_center()
            .justify_between()
            .px(px(PANEL_PADDING))
            .child(
                div()
                    .text_size(px(16.))
                    .font_weight(FontWeight::BOLD)
                    .child(format!("{} Contribution Grid", self.mapper.year()))
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap(px(12.))
                    .child(
                        div()
                            .text_size(px(12.))
                            .text_color(theme.subtext0)
                            .child("Hovered Date:")
                    )
                    .child(
                        div()
                            .text_size(px(12.))
                            .child(hovered.unwrap_or_else(|| "No date selected".to_string()))
                    )
                    .child(
                        div()
                            .id("export-button")
                            .flex()
                            .flex_row()
                            .items_center()
                            .gap(px(6.))
                            .h(px(24.))
                            .px(px(10.))
                            .bg(theme.accent)
                            .rounded(px(4.))
                            .text_size(px(12.))
                            .text_color(theme.crust)
                            .cursor_pointer()
                            .on_mouse_down(MouseButton::Left, move |_, window, app| {
                                export_target.update(app, |grid, cx| {
                                    grid.export_json(&ExportJson, window, cx);
                                });
                            })
                            .child(
                                svg()
                                    .path("icons/export.svg")
                                    .w(px(14.))
                                    .h(px(14.))
                                    .text_color(theme.crust)
                            )
                            .child("Export JSON")
                    )
            )
    }

    fn render_grid(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let label_color = theme.subtext0;
        let active_color = theme.grid_active;
        let empty_color = theme.surface0;

        div()
            .flex()
            .flex_row()
            .flex_none()
            .p(px(PANEL_PADDING))
            .child(
                // Day labels
                div()
                    .flex()
                    .flex_col()
                    .flex_none()
                    .w(px(DAY_LABEL_WIDTH))
                    .gap(px(CELL_GAP))
                    .children(DAYS_OF_WEEK.map(|day| {
                        div()
                            .h(px(CELL_SIZE))
                            .flex()
                            .items_center()
                            .justify_end()
                            .pr(px(8.))
                            .text_size(px(10.))
                            .text_color(label_color)
                            .child(day)
                    }))
            )
            .child(
                // Cells, one row per weekday
                div()
                    .flex()
                    .flex_col()
                    .gap(px(CELL_GAP))
                    .children(
                        (0..GRID_ROWS).map(|row| {
                            div()
                                .flex()
                                .flex_row()
                                .gap(px(CELL_GAP))
                                .children(
                                    (0..GRID_COLS).map(|col| {
                                        let pos = CellPosition::new(row, col);
                                        let active = self.editor.grid().get(pos);
                                        let press_target = cx.entity().clone();
                                        let hover_target = cx.entity().clone();

                                        div()
                                            .id(ElementId::Name(format!("cell-{}-{}", row, col).into()))
                                            .w(px(CELL_SIZE))
                                            .h(px(CELL_SIZE))
                                            .flex_none()
                                            .rounded(px(3.))
                                            .bg(if active { active_color } else { empty_color })
                                            .on_mouse_down(MouseButton::Left, move |_, window, app| {
                                                press_target.update(app, |grid, cx| {
                                                    grid.on_cell_mouse_down(pos, window, cx);
                                                });
                                            })
                                            .on_mouse_move(move |_, _window, app| {
                                                hover_target.update(app, |grid, cx| {
                                                    grid.on_cell_mouse_move(pos, cx);
                                                });
                                            })
                                    })
                                )
                        })
                    )
            )
    }

    fn render_result(&self, json: SharedString, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let copy_target = cx.entity().clone();

        div()
            .relative()
            .flex_none()
            .mx(px(PANEL_PADDING))
            .mb(px(PANEL_PADDING))
            .p(px(12.))
            .max_h(px(RESULT_PANE_HEIGHT))
            .bg(theme.mantle)
            .border_1()
            .border_color(theme.surface0)
            .rounded(px(6.))
            .overflow_hidden()
            .child(
                div()
                    .text_size(px(11.))
                    .text_color(theme.subtext1)
                    .child(json)
            )
            .child(
                div()
                    .id("copy-button")
                    .absolute()
                    .top(px(8.))
                    .right(px(8.))
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap(px(4.))
                    .h(px(22.))
                    .px(px(8.))
                    .bg(theme.surface1)
                    .rounded(px(4.))
                    .text_size(px(11.))
                    .text_color(theme.text)
                    .cursor_pointer()
                    .on_mouse_down(MouseButton::Left, move |_, window, app| {
                        copy_target.update(app, |grid, cx| {
                            grid.copy_json(&CopyJson, window, cx);
                        });
                    })
                    .child(
                        svg()
                            .path("icons/copy.svg")
                            .w(px(12.))
                            .h(px(12.))
                            .text_color(theme.text)
                    )
                    .child("Copy")
            )
    }

    fn render_footer(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>();
        let mode_text = if self.editor.is_drawing() {
            "-- DRAWING --"
        } else {
            "-- IDLE --"
        };
        let status = self
            .status
            .clone()
            .unwrap_or_else(|| "cmd-e to export".into());

        div()
            .flex()
            .flex_row()
            .w_full()
            .h(px(FOOTER_HEIGHT))
            .bg(theme.mantle)
            .border_t_1()
            .border_color(theme.surface0)
            .items_center()
            .justify_between()
            .px(px(8.))
            .text_size(px(12.))
            .text_color(theme.subtext0)
            .child(
                div()
                    .font_weight(FontWeight::BOLD)
                    .child(mode_text)
            )
            .child(status)
    }
}

impl Render for ContributionGrid {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let release_target = cx.entity().clone();
        let result_json = self.result_json.clone();

        div()
            .flex()
            .flex_col()
            .size_full()
            .key_context("GraphEditor")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::export_json))
            .on_action(cx.listener(Self::copy_json))
            .on_action(cx.listener(Self::clear_grid))
            // A release anywhere in the window ends the current stroke.
            .on_mouse_up(MouseButton::Left, move |_, _window, app| {
                release_target.update(app, |grid, cx| {
                    grid.on_mouse_up(cx);
                });
            })
            .child(self.render_header(cx))
            .child(self.render_grid(cx))
            .child(div().flex_1())
            .when_some(result_json, |d, json| d.child(self.render_result(json, cx)))
            .child(self.render_footer(cx))
    }
}

impl Focusable for ContributionGrid {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
