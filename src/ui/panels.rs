use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::views::Selection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – club selector
// ---------------------------------------------------------------------------

/// Render the sidebar: the "Todos" + club-name selector.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filtros");
    ui.separator();

    let table = match &state.table {
        Some(t) => club_names_owned(t),
        None => {
            ui.label("Nenhum dado carregado.");
            return;
        }
    };

    ui.label("Selecione um clube:");
    egui::ComboBox::from_id_salt("club_selector")
        .selected_text(state.selection.label().to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.selection == Selection::Todos, "Todos")
                .clicked()
            {
                state.selection = Selection::Todos;
            }
            for name in &table {
                let selected = state.selection.club_name() == Some(name.as_str());
                if ui.selectable_label(selected, name).clicked() {
                    state.selection = Selection::Club(name.clone());
                }
            }
        });

    ui.add_space(8.0);
    ui.small(
        "Use o filtro para analisar um time específico \
         em comparação com os outros.",
    );
}

// Clone the names out so the combo can mutate `state` while iterating.
fn club_names_owned(table: &crate::data::model::SharedTable) -> Vec<String> {
    table.club_names().map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Arquivo", |ui: &mut Ui| {
            if ui.button("Abrir…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} clubes carregados de {}",
                table.len(),
                state.source_path.display()
            ));
        }

        if let Some(msg) = &state.load_error {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Point the dashboard at another season's CSV.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Abrir tabela de clubes")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_from(Path::new(&path));
    }
}
