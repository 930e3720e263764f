//! Resizable table demo.
//!
//! Drag the vertical bars between header cells to resize columns. Keys:
//! `s` cycles the sort column, `5` toggles the "owner" column, `q`/Esc quits.
//! Diagnostics go to `resizable.log`.

use std::fs::File;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use crossterm::{cursor, execute, terminal};
use gridline::{
    ArithmeticMeasure, Column, MemoryStore, SystemClock, TableConfig, TableLayout, WidthSpec,
};
use gridline_term::{display_width, HeaderBar, PointerEvent};
use simplelog::{Config, LevelFilter, WriteLogger};

struct FileRow {
    name: &'static str,
    kind: &'static str,
    size: &'static str,
    modified: &'static str,
    owner: &'static str,
}

impl FileRow {
    fn cell(&self, key: &str) -> &'static str {
        match key {
            "name" => self.name,
            "kind" => self.kind,
            "size" => self.size,
            "modified" => self.modified,
            "owner" => self.owner,
            _ => "",
        }
    }
}

const ROWS: &[FileRow] = &[
    FileRow {
        name: "quarterly-report.pdf",
        kind: "document",
        size: "1.2 MB",
        modified: "2026-07-30 09:14",
        owner: "finance",
    },
    FileRow {
        name: "backup.tar.zst",
        kind: "archive",
        size: "840 MB",
        modified: "2026-08-01 02:00",
        owner: "ops",
    },
    FileRow {
        name: "team-photo.jpg",
        kind: "image",
        size: "4.7 MB",
        modified: "2026-06-12 16:41",
        owner: "hr",
    },
    FileRow {
        name: "deploy.sh",
        kind: "script",
        size: "2 KB",
        modified: "2026-08-05 11:03",
        owner: "ops",
    },
];

fn main() -> io::Result<()> {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("resizable.log")?,
    );

    let config = TableConfig::new(vec![
        Column::new("name").adjustable().sortable(),
        Column::new("kind").adjustable().width(WidthSpec::Percent(15.0)),
        Column::new("size").adjustable().sortable(),
        Column::new("modified").configurable(),
        Column::new("owner").configurable(),
    ])
    .min_col_width(8)
    .scrollbar_reserve(1)
    .storage_key("resizable-demo.columns");

    let mut layout = TableLayout::new(config, ArithmeticMeasure, MemoryStore::default(), SystemClock);

    // Seed content widths so the overflow decision has something to chew on.
    for col in ["name", "kind", "size", "modified", "owner"] {
        let widest = ROWS
            .iter()
            .map(|row| display_width(row.cell(col)))
            .max()
            .unwrap_or(0)
            .max(display_width(col));
        layout.record_content_width(col, widest as u32 + 2);
    }

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&mut stdout, &mut layout);

    execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(
    stdout: &mut io::Stdout,
    layout: &mut TableLayout<ArithmeticMeasure, MemoryStore, SystemClock>,
) -> io::Result<()> {
    let header = HeaderBar::new(0, 0);
    let sortable: Vec<String> = layout
        .config()
        .columns
        .iter()
        .filter(|c| c.sortable)
        .map(|c| c.key.clone())
        .collect();
    let mut sort_index: Option<usize> = None;

    let (width, _) = terminal::size()?;
    layout.set_container_width(i64::from(width));
    layout.refresh();

    let mut dirty = true;
    loop {
        if dirty {
            draw(stdout, &header, layout)?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('s') => {
                        sort_index = match sort_index {
                            None if !sortable.is_empty() => Some(0),
                            Some(i) if i + 1 < sortable.len() => Some(i + 1),
                            _ => None,
                        };
                        layout.set_sort_key(sort_index.map(|i| sortable[i].as_str()));
                        dirty = true;
                    }
                    KeyCode::Char('5') => {
                        let enabled = layout.visibility().user_enabled("owner");
                        layout.set_enabled("owner", !enabled);
                        dirty = true;
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if let Some(pointer) = PointerEvent::from_mouse(mouse) {
                        dirty |= header.handle(layout, pointer);
                    }
                }
                Event::Resize(w, _) => {
                    layout.set_container_width(i64::from(w));
                    dirty = true;
                }
                _ => {}
            }
        }

        dirty |= layout.poll();
    }

    Ok(())
}

fn draw(
    stdout: &mut io::Stdout,
    header: &HeaderBar,
    layout: &TableLayout<ArithmeticMeasure, MemoryStore, SystemClock>,
) -> io::Result<()> {
    execute!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::All)
    )?;

    writeln!(stdout, "{}\r", header.line(layout))?;
    for row in ROWS {
        writeln!(
            stdout,
            "{}\r",
            header.data_line(layout, |key| row.cell(key).to_string())
        )?;
    }

    let hidden = layout.visibility().disabled_keys();
    writeln!(
        stdout,
        "\r\n total {} px | fixed layout: {} | hidden: {}\r",
        layout.widths().total_width(),
        layout.widths().fixed_layout(),
        if hidden.is_empty() {
            "none".to_string()
        } else {
            hidden.join(", ")
        }
    )?;
    writeln!(
        stdout,
        " drag │ to resize · s sort · 5 toggle owner · q quit\r"
    )?;
    stdout.flush()
}
