use slotdesk_core::{
    models::slot::{SlotCell, WeekDay},
    selection::SlotSelection,
};

/// Renders the weekly grid as text: one row per visible bucket, `#` for a
/// selected cell, `x` for a disabled one and `.` otherwise.
pub fn render_grid(selection: &SlotSelection) -> String {
    let grid = selection.grid();
    let mut out = String::from("      ");
    for day in WeekDay::ALL {
        out.push_str(&format!(" {}", day.short_name()));
    }
    out.push('\n');

    let labels = grid.labels();
    for index in grid.visible_rows(selection.disabled()) {
        out.push_str(&format!("{:<6}", labels[index]));
        for day in WeekDay::ALL {
            let cell = SlotCell::new(day, index);
            let mark = if selection.is_selected(cell) {
                '#'
            } else if selection.is_disabled(cell) {
                'x'
            } else {
                '.'
            };
            out.push_str(&format!("   {mark}"));
        }
        out.push('\n');
    }
    out
}
