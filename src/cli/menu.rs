// src/cli/menu.rs
use std::io;
use std::time::Duration;

use console::{style, Key, Term};
use inquire::Text;
use tokio::task::JoinHandle;

use crate::models::CharClass;
use crate::ui::state::PageState;
use crate::ui::{Clipboard, KeyEvent, PageController, PasswordApi, Shortcut, UiEvent};
use super::handlers::strength_bar;

/// What a single key press on the interactive page asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuInput {
    Event(UiEvent),
    EditPassword,
    EditLength,
    Toggle(CharClass),
    Quit,
}

/// Terminals send Alt+<key> as ESC followed by the key.
pub fn menu_input(key: &Key) -> Option<MenuInput> {
    match key {
        Key::UnknownEscSeq(seq) if seq.len() == 1 => {
            Some(MenuInput::Event(UiEvent::KeyDown(KeyEvent::alt(seq[0]))))
        }
        Key::Escape => Some(MenuInput::Quit),
        Key::Char(c) => Some(match c {
            'q' => MenuInput::Quit,
            'p' => MenuInput::EditPassword,
            'l' => MenuInput::EditLength,
            'e' => MenuInput::Event(UiEvent::EvaluateClicked),
            's' => MenuInput::Event(UiEvent::StrengthenClicked),
            '1'..='4' => {
                let index = *c as usize - '1' as usize;
                MenuInput::Toggle(CharClass::ALL[index])
            }
            other => MenuInput::Event(UiEvent::KeyDown(KeyEvent::plain(*other))),
        }),
        _ => None,
    }
}

pub fn render_page(page: &PageState) -> String {
    let mut lines = vec![
        "╔══════════════════════════════════════╗".to_string(),
        "║          🔐 GENERÁTOR HESIEL          ║".to_string(),
        "╚══════════════════════════════════════╝".to_string(),
        String::new(),
        format!("Dĺžka hesla: {}", page.length_input),
    ];

    for (i, class) in CharClass::ALL.iter().enumerate() {
        let mark = if page.includes(*class) { "[x]" } else { "[ ]" };
        lines.push(format!("  {} {} {}", i + 1, mark, class.label()));
    }

    lines.push(String::new());
    let output = if page.password_output.is_empty() {
        style("(žiadne heslo)".to_string()).dim().to_string()
    } else {
        style(page.password_output.clone()).bold().to_string()
    };
    lines.push(format!("🔑 {}  [{}]", output, page.copy_button.label()));
    lines.push(strength_bar(&page.generated_strength));

    lines.push(String::new());
    lines.push(format!("Existujúce heslo: {}", page.existing_password));
    lines.push(strength_bar(&page.existing_strength));
    if page.feedback.visible {
        lines.push(style(page.feedback.content.clone()).cyan().to_string());
    }

    lines.push(String::new());
    lines.push(
        style(format!(
            "{} generovať · {} kopírovať · p heslo · e vyhodnotiť · s vylepšiť · l dĺžka · 1-4 znaky · q koniec",
            Shortcut::Generate.hint(),
            Shortcut::Copy.hint(),
        ))
        .dim()
        .to_string(),
    );

    lines.join("\n")
}

/// How often the page checks for changes made in the background, such as
/// the copy confirmation running out.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(200);

/// Remembers what was drawn last so the page is only redrawn on change.
#[derive(Debug, Default)]
pub struct Screen {
    shown: Option<PageState>,
}

impl Screen {
    /// Rendered page when `page` differs from what is on screen.
    pub fn refresh(&mut self, page: PageState) -> Option<String> {
        if self.shown.as_ref() == Some(&page) {
            return None;
        }
        let rendered = render_page(&page);
        self.shown = Some(page);
        Some(rendered)
    }

    pub fn invalidate(&mut self) {
        self.shown = None;
    }
}

// Key reads block, so they run off the runtime
fn read_key(term: &Term) -> JoinHandle<io::Result<Key>> {
    let term = term.clone();
    tokio::task::spawn_blocking(move || term.read_key())
}

fn draw(term: &Term, rendered: &str) -> io::Result<()> {
    term.clear_screen()?;
    term.write_line(rendered)
}

pub async fn run_interactive<A, C>(controller: &PageController<A, C>) -> anyhow::Result<()>
where
    A: PasswordApi,
    C: Clipboard,
{
    let term = Term::stdout();
    let mut screen = Screen::default();
    let mut pending = read_key(&term);

    loop {
        if let Some(rendered) = screen.refresh(controller.snapshot()) {
            draw(&term, &rendered)?;
        }

        let key = tokio::select! {
            key = &mut pending => key??,
            _ = tokio::time::sleep(REFRESH_INTERVAL) => continue,
        };

        let Some(input) = menu_input(&key) else {
            pending = read_key(&term);
            continue;
        };

        let event = match input {
            MenuInput::Quit => break,
            MenuInput::Event(event) => event,
            MenuInput::EditPassword => {
                let current = controller.snapshot().existing_password;
                let value = Text::new("Existujúce heslo:").with_initial_value(&current).prompt()?;
                screen.invalidate();
                UiEvent::ExistingPasswordInput(value)
            }
            MenuInput::EditLength => {
                let current = controller.snapshot().length_input;
                let value = Text::new("Dĺžka hesla:").with_initial_value(&current).prompt()?;
                screen.invalidate();
                UiEvent::LengthInput(value)
            }
            MenuInput::Toggle(class) => {
                let included = controller.snapshot().includes(class);
                UiEvent::ClassToggled(class, !included)
            }
        };

        if let Err(e) = controller.dispatch(event).await.result {
            term.write_line(&style(format!("⚠️  {}", e.alert_message())).red().to_string())?;
            term.write_line(&style("Stlačte ľubovoľný kláves...").dim().to_string())?;
            read_key(&term).await??;
            screen.invalidate();
        }

        pending = read_key(&term);
    }

    if let Err(e) = controller.persist_clipboard().await {
        log::warn!("Copied password not kept after exit: {}", e);
    }

    log::info!("Interactive session closed");
    Ok(())
}
