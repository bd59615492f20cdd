use crate::coord::SlotPos;
use crate::detail::{DetailModal, ItemRowView, SubmitOutcome};
use crate::grid::CellView;
use crate::item::ItemField;
use crate::statics;
use crate::transfer::ImportOutcome;
use crate::{Tracker, TrackerConfig};
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::path::PathBuf;

const CELL_SIZE: [f32; 2] = [104.0, 76.0];
const ITEM_TABLE_HEIGHT: f32 = 260.0;

pub fn run_gui(config: TrackerConfig) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1400.0, 720.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            let app = SlotGridApp::new(config);
            cc.egui_ctx.set_visuals(app.visuals());
            Ok(Box::new(app))
        }),
    )
}

/// Interactions collected while drawing the grid, applied once drawing is done.
#[derive(Clone, Copy, Debug)]
enum CellAction {
    ToggleLock(SlotPos),
    ToggleSelect(SlotPos),
    View(SlotPos),
    Edit(SlotPos),
}

/// GUI shell around [`Tracker`]: holds only presentation state (status line,
/// error bar, dialog directory, theme, title buffer).
struct SlotGridApp {
    tracker: Tracker,
    title_input: String,
    dialog_dir: Option<PathBuf>,
    status: String,
    last_error: Option<String>,
    theme_dark: bool,
}

impl SlotGridApp {
    fn new(config: TrackerConfig) -> Self {
        let theme_dark = config.dark_theme;
        let tracker = Tracker::new(config);
        Self {
            title_input: tracker.title().to_string(),
            tracker,
            dialog_dir: None,
            status: String::new(),
            last_error: None,
            theme_dark,
        }
    }

    fn visuals(&self) -> egui::Visuals {
        if self.theme_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }

    fn file_dialog(&self) -> rfd::FileDialog {
        let mut dlg =
            rfd::FileDialog::new().add_filter(statics::EN_FILTER_CSV, &[statics::CSV_EXTENSION]);
        if let Some(dir) = self.dialog_dir.clone() {
            dlg = dlg.set_directory(dir);
        }
        dlg
    }

    fn export_file(&mut self) {
        let Some(path) = self
            .file_dialog()
            .set_file_name(self.tracker.export_file_name())
            .save_file()
        else {
            return;
        };

        if let Err(e) = self.tracker.export_to(&path) {
            tracing::warn!(error = %format!("{e:#}"), "export failed");
            self.last_error = Some(format!("{}: {e:#}", statics::EN_ERR_EXPORT));
        } else {
            self.dialog_dir = path.parent().map(PathBuf::from);
            self.status = format!("{} {}", statics::EN_STATUS_EXPORTED, path.display());
            self.last_error = None;
        }
    }

    fn import_file(&mut self) {
        let Some(path) = self.file_dialog().pick_file() else {
            return;
        };

        match self.tracker.import_from(&path) {
            Ok(ImportOutcome::Replaced(count)) => {
                self.dialog_dir = path.parent().map(PathBuf::from);
                self.status = format!(
                    "{} {count} {} {}",
                    statics::EN_STATUS_IMPORTED,
                    statics::EN_LABEL_ITEMS.trim_end_matches(':'),
                    path.display()
                );
                self.last_error = None;
            }
            Ok(ImportOutcome::NoData) => {
                self.status = format!("{} {}", statics::EN_STATUS_IMPORT_EMPTY, path.display());
            }
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "import failed");
                self.last_error = Some(format!("{}: {e:#}", statics::EN_ERR_IMPORT));
            }
        }
    }

    fn apply_cell_action(&mut self, action: CellAction) {
        match action {
            CellAction::ToggleLock(pos) => {
                self.tracker.toggle_lock(pos);
            }
            CellAction::ToggleSelect(pos) => {
                self.tracker.toggle_select(pos);
            }
            CellAction::View(pos) => {
                self.tracker.open_view(pos);
            }
            CellAction::Edit(pos) => {
                self.tracker.open_edit(pos);
            }
        }
    }

    /// Draw one slot. The cell body toggles selection; the buttons drawn on top of it
    /// take their own clicks.
    fn render_cell(
        ui: &mut egui::Ui,
        view: &CellView,
        keyboard_select: bool,
        actions: &mut Vec<CellAction>,
    ) {
        let sense = if view.locked {
            egui::Sense::hover()
        } else {
            egui::Sense::click()
        };
        let (rect, response) = ui.allocate_exact_size(egui::Vec2::from(CELL_SIZE), sense);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(
                egui::WidgetType::Button,
                !view.locked,
                &view.accessible_label,
            )
        });
        let response = response.on_hover_text(&view.accessible_label);

        if response.clicked_by(egui::PointerButton::Primary) {
            actions.push(CellAction::ToggleSelect(view.pos));
        }
        if keyboard_select
            && response.has_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Space))
        {
            actions.push(CellAction::ToggleSelect(view.pos));
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        let visuals = ui.style().interact_selectable(&response, view.selected);
        let fill = if view.locked {
            ui.visuals().extreme_bg_color
        } else {
            visuals.bg_fill
        };
        ui.painter().rect_filled(rect, visuals.corner_radius, fill);
        ui.painter().rect_stroke(
            rect,
            visuals.corner_radius,
            visuals.bg_stroke,
            egui::StrokeKind::Inside,
        );

        let text_color = if view.locked {
            ui.visuals().weak_text_color()
        } else {
            visuals.text_color()
        };

        let mut child = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(rect.shrink(4.0))
                .layout(egui::Layout::top_down(egui::Align::Min)),
        );
        child.horizontal(|ui| {
            ui.add(
                egui::Label::new(egui::RichText::new(&view.label).strong().color(text_color))
                    .selectable(false),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .small_button(view.lock_glyph)
                    .on_hover_text(view.lock_hint)
                    .clicked()
                {
                    actions.push(CellAction::ToggleLock(view.pos));
                }
            });
        });

        let count_text = if view.item_count > 0 {
            format!("{} {}", statics::EN_LABEL_ITEMS, view.item_count)
        } else {
            statics::EN_EMPTY.to_string()
        };
        child.add(
            egui::Label::new(egui::RichText::new(count_text).small().color(text_color))
                .selectable(false),
        );

        child.horizontal(|ui| {
            if ui
                .add_enabled(view.actions_enabled, egui::Button::new(statics::EN_BTN_VIEW).small())
                .clicked()
            {
                actions.push(CellAction::View(view.pos));
            }
            if ui
                .add_enabled(view.actions_enabled, egui::Button::new(statics::EN_BTN_EDIT).small())
                .clicked()
            {
                actions.push(CellAction::Edit(view.pos));
            }
        });
    }

    /// Numbered listing of a slot's items. Returns the store index whose
    /// "Edit Item" button was clicked, if any.
    fn render_item_table(ui: &mut egui::Ui, id: &str, rows: &[ItemRowView]) -> Option<usize> {
        let Some(first) = rows.first() else {
            ui.label(statics::EN_NO_ITEMS);
            return None;
        };

        let editable = rows.iter().any(|r| r.editable);
        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
        let mut edit_clicked = None;

        ui.push_id(id, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .max_scroll_height(ITEM_TABLE_HEIGHT)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto());
            for _ in &first.fields {
                table = table.column(
                    Column::initial(90.0)
                        .at_least(40.0)
                        .resizable(true)
                        .clip(true),
                );
            }
            if editable {
                table = table.column(Column::auto());
            }

            table
                .header(row_h, |mut header| {
                    header.col(|_| {});
                    for (label, _) in &first.fields {
                        header.col(|ui| {
                            ui.strong(label.trim_end_matches(':'));
                        });
                    }
                    if editable {
                        header.col(|_| {});
                    }
                })
                .body(|mut body| {
                    for row in rows {
                        body.row(row_h, |mut table_row| {
                            table_row.col(|ui| {
                                ui.strong(&row.heading);
                            });
                            for (_, value) in &row.fields {
                                table_row.col(|ui| {
                                    ui.add(egui::Label::new(value).truncate());
                                });
                            }
                            if editable {
                                table_row.col(|ui| {
                                    if row.editable
                                        && ui.small_button(statics::EN_BTN_EDIT_ITEM).clicked()
                                    {
                                        edit_clicked = Some(row.index);
                                    }
                                });
                            }
                        });
                    }
                });
        });

        edit_clicked
    }

    fn render_view_modal(&mut self, ctx: &egui::Context) {
        let coordinate = self.tracker.open_coordinate().unwrap_or_default().to_string();
        let rows = self.tracker.open_rows();
        let mut close_requested = false;

        let modal = egui::Modal::new(egui::Id::new("view_modal")).show(ctx, |ui| {
            ui.set_min_width(560.0);
            ui.heading(format!("{} {coordinate}", statics::EN_WINDOW_VIEW_PREFIX));
            ui.separator();
            Self::render_item_table(ui, "view_items", &rows);
            ui.separator();
            if ui.button(statics::EN_BTN_CLOSE).clicked() {
                close_requested = true;
            }
        });

        if close_requested || modal.should_close() {
            self.tracker.close_dialogs();
        }
    }

    fn render_edit_modal(&mut self, ctx: &egui::Context) {
        let coordinate = self.tracker.open_coordinate().unwrap_or_default().to_string();
        let rows = self.tracker.open_rows();
        let show_description = self.tracker.config().features.description;
        let submit_label = self.tracker.detail().submit_label();
        let shows_cancel = self.tracker.detail().shows_cancel();

        let mut close_requested = false;
        let mut submit_requested = false;
        let mut cancel_requested = false;
        let mut edit_clicked = None;

        let modal = egui::Modal::new(egui::Id::new("edit_modal")).show(ctx, |ui| {
            ui.set_min_width(640.0);
            ui.heading(format!("{} {coordinate}", statics::EN_WINDOW_EDIT_PREFIX));
            ui.separator();
            edit_clicked = Self::render_item_table(ui, "edit_items", &rows);
            ui.separator();

            ui.strong(if shows_cancel {
                statics::EN_HEADING_EDITING_ITEM
            } else {
                statics::EN_HEADING_NEW_ITEM
            });

            let draft = self.tracker.draft_mut();
            egui::Grid::new("item_form")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    for field in ItemField::EDITABLE {
                        if field == ItemField::Description && !show_description {
                            continue;
                        }
                        let Some(buffer) = draft.field_mut(field) else {
                            continue;
                        };
                        ui.label(field.form_label());
                        let edit = if field == ItemField::Notes {
                            egui::TextEdit::multiline(buffer).desired_rows(2)
                        } else {
                            egui::TextEdit::singleline(buffer)
                        };
                        let edit = if field == ItemField::Date {
                            edit.hint_text(statics::EN_HINT_DATE)
                        } else {
                            edit
                        };
                        let resp = ui.add(edit.desired_width(320.0));
                        if field != ItemField::Notes
                            && resp.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            submit_requested = true;
                        }
                        ui.end_row();
                    }
                });

            ui.horizontal(|ui| {
                if ui.button(submit_label).clicked() {
                    submit_requested = true;
                }
                if shows_cancel && ui.button(statics::EN_BTN_CANCEL).clicked() {
                    cancel_requested = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(statics::EN_BTN_CLOSE).clicked() {
                        close_requested = true;
                    }
                });
            });
        });

        if let Some(index) = edit_clicked {
            self.tracker.start_edit(index);
        }
        if cancel_requested {
            self.tracker.cancel_edit();
        }
        if submit_requested {
            match self.tracker.submit() {
                SubmitOutcome::Added { .. } | SubmitOutcome::Updated { .. } => {
                    self.last_error = None;
                }
                SubmitOutcome::Ignored | SubmitOutcome::Missing { .. } => {}
            }
        }
        if close_requested || modal.should_close() {
            self.tracker.close_dialogs();
        }
    }
}

impl eframe::App for SlotGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui.button(statics::EN_BTN_EXPORT).clicked() {
                    self.export_file();
                }
                if ui.button(statics::EN_BTN_IMPORT).clicked() {
                    self.import_file();
                }
                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    ctx.set_visuals(self.visuals());
                }

                if self.tracker.config().features.title_prefix {
                    ui.separator();
                    ui.label(statics::EN_LABEL_TITLE);
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.title_input)
                            .hint_text(statics::EN_HINT_TITLE)
                            .desired_width(220.0),
                    );
                    if resp.changed() {
                        self.tracker.set_title(self.title_input.clone());
                    }
                }

                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        if let Some(err) = self.last_error.clone() {
            egui::TopBottomPanel::top("error_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::RED, err);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(statics::EN_BTN_CLEAR).clicked() {
                            self.last_error = None;
                        }
                    });
                });
            });
        }

        egui::TopBottomPanel::bottom("bottom_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} {}", statics::EN_LABEL_ITEMS, self.tracker.store().len()));
                ui.separator();
                ui.label(format!(
                    "{} {}",
                    statics::EN_LABEL_SELECTED,
                    self.tracker.grid().selected_count()
                ));
                ui.separator();
                ui.label(format!(
                    "{} {}",
                    statics::EN_LABEL_LOCKED,
                    self.tracker.grid().locked_count()
                ));
            });
        });

        let views = self.tracker.cell_views();
        let keyboard_select = self.tracker.config().features.keyboard_select;
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                egui::Grid::new("slot_grid")
                    .spacing([6.0, 6.0])
                    .show(ui, |ui| {
                        for row in views.chunks(usize::from(statics::GRID_COLUMNS)) {
                            for view in row {
                                Self::render_cell(ui, view, keyboard_select, &mut actions);
                            }
                            ui.end_row();
                        }
                    });
            });
        });

        for action in actions {
            self.apply_cell_action(action);
        }

        match self.tracker.detail().modal() {
            DetailModal::Closed => {}
            DetailModal::Viewing(_) => self.render_view_modal(ctx),
            DetailModal::Editing(_) => self.render_edit_modal(ctx),
        }
    }
}
