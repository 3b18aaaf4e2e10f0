use eframe::egui::{self, Align2, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{
    uniform_grid_spacer, Bar, BarChart, HLine, Line, LineStyle, Plot, PlotPoint, PlotPoints,
    Points, Text, VLine,
};

use crate::color;
use crate::data::model::{ClubRecord, ClubTable};
use crate::data::views::{self, MetricSnapshot, Selection, SortKey};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – classification table + the five comparative charts
// ---------------------------------------------------------------------------

/// Render the whole dashboard in the central panel.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    if let Some(err) = &state.load_error {
        // Fail-fast: a broken dataset renders only the error, never a
        // partial dashboard.
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.colored_label(Color32::RED, format!("Erro ao carregar os dados: {err}"));
        });
        return;
    }
    let Some(table) = state.table.clone() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Abra uma tabela de clubes  (Arquivo → Abrir…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Análise de Clubes – Brasileirão 2014 ⚽");
            ui.label(
                "Análise visual dos clubes do campeonato brasileiro de 2014. \
                 Use o filtro na barra lateral para destacar um time em todos \
                 os gráficos.",
            );
            ui.add_space(8.0);

            ui.strong("Tabela de Classificação Final");
            classification_table(ui, &table, &state.selection);
            ui.add_space(12.0);

            if let Some(name) = state.selection.club_name() {
                if let Some(snap) = MetricSnapshot::for_club(&table, name) {
                    metric_strip(ui, name, &snap);
                    ui.separator();
                }
            }

            ui.strong("Análises Gráficas Comparativas");
            ui.columns(2, |cols: &mut [Ui]| {
                cols[0].label("Ranking de Vitórias por Clube");
                club_bar_chart(
                    &mut cols[0],
                    "wins_chart",
                    &views::ranked_by(&table, SortKey::Wins),
                    &state.selection,
                    |r| r.wins as f64,
                    |v| format!("{v:.0}"),
                    |v| format!("{v:.0}"),
                );

                cols[1].label("Desempenho Ofensivo vs. Defensivo");
                offense_defense_chart(&mut cols[1], &table, &state.selection);
            });
            ui.add_space(12.0);

            ui.label("Valor de Mercado Total dos Clubes");
            club_bar_chart(
                ui,
                "total_value_chart",
                &views::ranked_by(&table, SortKey::TotalValue),
                &state.selection,
                |r| r.squad_total_value as f64,
                |v| format!("€{:.0}M", v / 1_000_000.0),
                |v| format!("€{:.0}M", v / 1_000_000.0),
            );
            ui.add_space(12.0);

            ui.strong("Outras Análises Estatísticas dos Elencos");
            ui.columns(2, |cols: &mut [Ui]| {
                cols[0].label("Idade Média do Elenco por Clube");
                club_bar_chart(
                    &mut cols[0],
                    "age_chart",
                    &views::ranked_by(&table, SortKey::AverageAge),
                    &state.selection,
                    |r| r.squad_average_age,
                    |v| format!("{v:.1} anos"),
                    |v| format!("{v:.0}"),
                );

                cols[1].label("Valor Médio de Mercado por Jogador");
                club_bar_chart(
                    &mut cols[1],
                    "average_value_chart",
                    &views::ranked_by(&table, SortKey::AverageValue),
                    &state.selection,
                    |r| r.squad_average_value as f64,
                    |v| format!("€{:.2}M", v / 1_000_000.0),
                    |v| format!("€{:.1}M", v / 1_000_000.0),
                );
            });
        });
}

// ---------------------------------------------------------------------------
// Classification table
// ---------------------------------------------------------------------------

fn classification_table(ui: &mut Ui, table: &ClubTable, selection: &Selection) {
    let rows = views::classification(table);

    TableBuilder::new(ui)
        .striped(true)
        // The dashboard scrolls as a whole; the table must not scroll itself.
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(40.0))
        .column(Column::remainder().at_least(140.0))
        .columns(Column::auto().at_least(60.0), 6)
        .header(20.0, |mut header| {
            for title in [
                "Pos.",
                "Clube",
                "Vitórias",
                "Derrotas",
                "Empates",
                "Saldo",
                "Gols",
                "Gols Sofridos",
            ] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for rec in rows {
                let highlighted = selection.is_highlighted(rec);
                body.row(18.0, |mut row| {
                    row.set_selected(highlighted);
                    row.col(|ui: &mut Ui| {
                        ui.label(rec.original_rank.to_string());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&rec.name);
                    });
                    for value in [
                        rec.wins.to_string(),
                        rec.losses.to_string(),
                        rec.draws.to_string(),
                        rec.goal_difference.to_string(),
                        rec.goals_for.to_string(),
                        rec.goals_against.to_string(),
                    ] {
                        row.col(|ui: &mut Ui| {
                            ui.label(value.clone());
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Metric snapshot strip
// ---------------------------------------------------------------------------

fn metric_strip(ui: &mut Ui, name: &str, snap: &MetricSnapshot) {
    ui.strong(format!("Métricas Principais de {name}"));
    ui.columns(4, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Vitórias", snap.wins.to_string());
        metric(&mut cols[1], "Saldo de Gols", snap.goal_difference.to_string());
        metric(&mut cols[2], "Gols Marcados", snap.goals_for.to_string());
        metric(
            &mut cols[3],
            "Valor do Elenco (Milhões €)",
            format!("{:.2} M", snap.total_value_millions),
        );
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.small(label);
        ui.heading(RichText::new(value).strong());
    });
}

// ---------------------------------------------------------------------------
// Horizontal bar chart, one bar per club
// ---------------------------------------------------------------------------

/// Draw one horizontal bar per club, highest value on top, with the selected
/// club highlighted. `bar_label` annotates each bar, `axis_label` formats the
/// value-axis ticks.
fn club_bar_chart(
    ui: &mut Ui,
    id: &str,
    rows: &[&ClubRecord],
    selection: &Selection,
    value: impl Fn(&ClubRecord) -> f64,
    bar_label: impl Fn(f64) -> String,
    axis_label: impl Fn(f64) -> String + 'static,
) {
    let n = rows.len();
    let names: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
    let colors = color::bar_palette(rows, selection);
    let text_color = ui.visuals().text_color();

    let mut bars = Vec::with_capacity(n);
    let mut annotations = Vec::with_capacity(n);
    let mut max_value = 0.0_f64;
    for (i, rec) in rows.iter().enumerate() {
        let v = value(rec);
        max_value = max_value.max(v);
        // Row 0 (largest value) sits at the top of the y axis.
        let y = (n - i) as f64;
        annotations.push((y, v));
        bars.push(Bar::new(y, v).width(0.6).fill(colors[i]).name(&rec.name));
    }
    let label_pad = max_value * 0.01;

    let tick_name = move |v: f64| -> String {
        let rounded = v.round();
        if (v - rounded).abs() > 1e-6 {
            return String::new();
        }
        let pos = rounded as i64;
        if pos < 1 || pos > n as i64 {
            return String::new();
        }
        names[n - pos as usize].clone()
    };

    Plot::new(id)
        .height(380.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid([true, false])
        .y_grid_spacer(uniform_grid_spacer(|_| [4.0, 2.0, 1.0]))
        .y_axis_formatter(move |mark, _range| tick_name(mark.value))
        .x_axis_formatter(move |mark, _range| axis_label(mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());

            // Value annotation at the end of each bar.
            for (y, v) in annotations {
                plot_ui.text(
                    Text::new(PlotPoint::new(v + label_pad, y), bar_label(v))
                        .anchor(Align2::LEFT_CENTER)
                        .color(text_color),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Offense / defense scatter
// ---------------------------------------------------------------------------

fn offense_defense_chart(ui: &mut Ui, table: &ClubTable, selection: &Selection) {
    let means = views::goal_means(table);
    let limit = table
        .records()
        .iter()
        .map(|r| r.goals_for.max(r.goals_against))
        .max()
        .unwrap_or(0) as f64
        + 5.0;
    let text_color = ui.visuals().text_color();

    Plot::new("offense_defense")
        .height(380.0)
        .x_axis_label("Gols Marcados (melhor →)")
        .y_axis_label("Gols Sofridos (melhor ↓)")
        .show(ui, |plot_ui| {
            // Championship means split the plane into quadrants.
            plot_ui.vline(
                VLine::new(means.goals_for)
                    .color(Color32::GRAY)
                    .style(LineStyle::dashed_loose()),
            );
            plot_ui.hline(
                HLine::new(means.goals_against)
                    .color(Color32::GRAY)
                    .style(LineStyle::dashed_loose()),
            );
            // Zero goal-difference diagonal.
            plot_ui.line(
                Line::new(PlotPoints::from(vec![[0.0, 0.0], [limit, limit]]))
                    .color(Color32::RED)
                    .style(LineStyle::dashed_dense()),
            );

            let all: Vec<[f64; 2]> = table
                .records()
                .iter()
                .map(|r| [r.goals_for as f64, r.goals_against as f64])
                .collect();
            plot_ui.points(Points::new(all).radius(5.0).color(color::SCATTER));

            for rec in table.records() {
                let highlighted = selection.is_highlighted(rec);
                let point = [rec.goals_for as f64, rec.goals_against as f64];

                if highlighted {
                    plot_ui.points(
                        Points::new(vec![point])
                            .radius(8.0)
                            .color(color::HIGHLIGHT),
                    );
                }
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(point[0] + 0.8, point[1]),
                        RichText::new(&rec.name).size(if highlighted { 12.0 } else { 9.0 }),
                    )
                    .anchor(Align2::LEFT_CENTER)
                    .color(if highlighted {
                        color::HIGHLIGHT
                    } else {
                        text_color
                    }),
                );
            }
        });
}
