use chrono::Weekday;
use skyview_core::ViewState;
use std::fmt;

/// The weather screen as plain text.
pub struct Screen<'a> {
    state: &'a ViewState,
    today: Weekday,
}

impl<'a> Screen<'a> {
    pub fn new(state: &'a ViewState, today: Weekday) -> Self {
        Self { state, today }
    }
}

/// Render the whole screen as plain text.
pub fn render_screen(state: &ViewState, today: Weekday) -> String {
    Screen::new(state, today).to_string()
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Screen { state, today } = *self;
        let (from, to) = state.theme.gradient();

        writeln!(out, "[{} theme: {from} -> {to}]", state.theme)?;
        writeln!(out, "{}", state.city)?;
        writeln!(out)?;
        writeln!(out, "  {}  {}°", state.current.icon.glyph(), state.current.temperature_c)?;
        writeln!(out)?;

        let cards = state.day_cards(today);
        if !cards.is_empty() {
            let labels: Vec<_> = cards.iter().map(|c| format!("{:^5}", c.label)).collect();
            let icons: Vec<_> = cards.iter().map(|c| format!("{:^5}", c.icon.glyph())).collect();
            let temps: Vec<_> =
                cards.iter().map(|c| format!("{:^5}", format!("{}°", c.temperature_c))).collect();

            writeln!(out, "{}", labels.join(" "))?;
            writeln!(out, "{}", icons.join(" "))?;
            writeln!(out, "{}", temps.join(" "))?;
        }

        if let Some(err) = &state.last_error {
            writeln!(out)?;
            writeln!(out, "! {err}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyview_core::{CurrentReading, ForecastEntry, Snapshot, Theme, ViewEvent};

    fn loaded() -> ViewState {
        let forecast = [5.0, 22.0, -1.5]
            .iter()
            .zip(0_i64..)
            .map(|(t, i)| ForecastEntry {
                date: format!("2024-01-0{}", i + 1),
                temperature_c: *t,
                day_offset: i,
            })
            .collect();

        ViewState::default().apply(ViewEvent::SnapshotLoaded(Snapshot {
            current: CurrentReading::from_celsius(15.7),
            forecast,
        }))
    }

    #[test]
    fn renders_header_and_cards() {
        let screen = render_screen(&loaded(), Weekday::Sat);

        assert!(screen.starts_with("[day theme: blue -> lightblue]\nRivne, UA\n"));
        assert!(screen.contains("⛅  15°"));
        assert!(screen.contains(" SAT   SUN   MON "));
        assert!(screen.contains("-1°"));
        assert!(!screen.contains('!'));
    }

    #[test]
    fn default_screen_has_no_cards() {
        let screen = render_screen(&ViewState::default(), Weekday::Mon);
        assert!(screen.contains("⛅  0°"));
        assert!(!screen.contains("MON"));
    }

    #[test]
    fn renders_error_line_and_night_theme() {
        let state = loaded()
            .apply(ViewEvent::ToggleTheme)
            .apply(ViewEvent::FetchFailed { message: "Weather service is unavailable".into() });
        assert_eq!(state.theme, Theme::Night);

        let screen = render_screen(&state, Weekday::Sun);
        assert!(screen.starts_with("[night theme: black -> gray]"));
        assert!(screen.contains("SUN"));
        assert!(screen.ends_with("! Weather service is unavailable\n"));
    }
}
