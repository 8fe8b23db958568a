//! Terminal rendering of the form

use std::io::{self, Write};
use crossterm::style::{StyledContent, Stylize};

use super::form::{
    ButtonColor, Screen, ARRIVAL_HEADER, COUNTDOWN_HEADER, DEPARTURE_HEADER, TITLE,
};

fn paint_button(screen: &Screen) -> StyledContent<String> {
    let label = format!("[ {} ]", screen.button.label).bold();
    match screen.button.color {
        ButtonColor::Blue => label.white().on_blue(),
        ButtonColor::Red => label.white().on_red(),
    }
}

/// Draw the whole form
pub fn render_form<W: Write>(out: &mut W, screen: &Screen) -> io::Result<()> {
    writeln!(out, "{}", TITLE.bold())?;
    writeln!(out)?;
    writeln!(out, "{}", ARRIVAL_HEADER.dark_grey())?;
    writeln!(out, "  {}", screen.arrival)?;
    writeln!(out, "{}", DEPARTURE_HEADER.dark_grey())?;
    writeln!(out, "  {}", screen.departure.as_str().bold().blue())?;
    writeln!(out, "{}", COUNTDOWN_HEADER.dark_grey())?;
    writeln!(out, "  {}", screen.countdown.as_str().bold().red())?;
    writeln!(out)?;
    writeln!(out, "  {}", paint_button(screen))?;
    out.flush()
}

/// Draw only the countdown line, used on every tick
pub fn render_countdown<W: Write>(out: &mut W, screen: &Screen) -> io::Result<()> {
    writeln!(
        out,
        "{}: {}  {}",
        COUNTDOWN_HEADER,
        screen.countdown.as_str().red(),
        paint_button(screen)
    )?;
    out.flush()
}

/// Print one snapshot as a JSON line
pub fn render_json<W: Write>(out: &mut W, screen: &Screen) -> io::Result<()> {
    serde_json::to_writer(&mut *out, screen)?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{state::CountdownState, view::form::Button};

    fn screen(state: CountdownState) -> Screen {
        Screen {
            arrival: "09:00".into(),
            departure: "18:15".into(),
            countdown: "9:15:00".into(),
            button: Button::for_state(&state),
            state,
        }
    }

    fn rendered(f: impl Fn(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn form_contains_every_section() {
        let text = rendered(|out| render_form(out, &screen(CountdownState::new())));

        for expected in [TITLE, ARRIVAL_HEADER, DEPARTURE_HEADER, COUNTDOWN_HEADER, "09:00", "18:15", "9:15:00", "Start"] {
            assert!(text.contains(expected), "missing {expected:?} in {text:?}");
        }
    }

    #[test]
    fn countdown_line_shows_stop_while_running() {
        let text = rendered(|out| render_countdown(out, &screen(CountdownState::running(33_300))));
        assert!(text.contains("9:15:00"));
        assert!(text.contains("Stop"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn json_is_one_line_per_snapshot() {
        let text = rendered(|out| render_json(out, &screen(CountdownState::running(5))));
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();

        assert_eq!(text.lines().count(), 1);
        assert_eq!(value["state"]["remaining_seconds"], 5);
        assert_eq!(value["button"]["color"], "red");
    }
}
