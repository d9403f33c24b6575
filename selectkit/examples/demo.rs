//! Interactive terminal demo.
//!
//! Keys: Space opens/closes, Up/Down move, type to search, Enter/Escape close,
//! Tab moves focus away and back, Ctrl+C quits.

use std::fs::File;
use std::time::{Duration, Instant};

use formdom::terminal::key_press;
use formdom::{render_lines, Document, Key, NativeOption, Node, Terminal};
use selectkit::{SelectConfig, SelectWidget};
use simplelog::{Config, LevelFilter, WriteLogger};

const IDLE_POLL: Duration = Duration::from_secs(1);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("selectkit-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut doc = Document::new();
    let root = doc.root();

    let title = doc.create(Node::div().text("Favourite fruit:"));
    doc.append_child(root, title)?;

    let fruits = [
        "Apple", "Apricot", "Banana", "Blackberry", "Blueberry", "Cherry", "Date", "Fig",
        "Grape", "Kiwi", "Lemon", "Mango",
    ];
    let native = doc.create_select(
        "fruit",
        fruits
            .iter()
            .map(|f| NativeOption::new(f.to_lowercase(), *f)),
    );
    doc.append_child(root, native)?;

    let select = SelectWidget::with_config(&mut doc, native, SelectConfig::new().visible_rows(5))?;
    doc.focus(select.container())?;

    let status = doc.create(Node::div());
    doc.append_child(root, status)?;

    let mut term = Terminal::new()?;

    loop {
        doc.advance_to(Instant::now());

        let submitted = doc.native_value(native)?.unwrap_or_default();
        let focus = if doc.focused().is_some() { "focused" } else { "blurred" };
        doc.set_text(status, format!("form value: {submitted} ({focus})"))?;
        term.draw(&render_lines(&doc, root, "selected"))?;

        // Sleep until input arrives or the next timer is due
        let timeout = doc
            .timers()
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        for raw in term.poll(timeout)? {
            let Some((key, modifiers)) = key_press(&raw) else {
                continue;
            };
            match key {
                Key::Char('c') if modifiers.ctrl => return Ok(()),
                Key::Tab | Key::BackTab => {
                    if doc.focused().is_some() {
                        doc.blur();
                    } else {
                        doc.focus(select.container())?;
                    }
                }
                _ => doc.key_press(key, modifiers),
            }
        }
    }
}
