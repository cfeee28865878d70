mod render;

use anyhow::{Context, Result, bail};
use coursebook_config::Config;
use coursebook_engine::{ModuleContent, PaginationConfig, Textbook, slots_from_json};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

const USAGE: &str =
    "Usage: coursebook-cli <module.md|module.json> [--slots <slots.json>] [--toc] [--search <query>] [--json]";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    module: PathBuf,
    slots: Option<PathBuf>,
    toc: bool,
    search: Option<String>,
    json: bool,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = Args::default();
        let mut module = None;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--slots" => {
                    let value = args.next().context("--slots needs a file")?;
                    parsed.slots = Some(PathBuf::from(value));
                }
                "--search" => {
                    parsed.search = Some(args.next().context("--search needs a query")?);
                }
                "--toc" => parsed.toc = true,
                "--json" => parsed.json = true,
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                _ if module.is_some() => bail!("only one module path may be given"),
                _ => module = Some(PathBuf::from(arg)),
            }
        }
        parsed.module = module.context("no module path given")?;
        Ok(parsed)
    }

    fn interactive(&self) -> bool {
        !self.toc && !self.json && self.search.is_none()
    }
}

/// Reads a module from a `.json` record or a plain text file; plain files take
/// their title from the file name.
fn load_module(path: &Path, default_locale: Option<&str>) -> Result<ModuleContent> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read module {}", path.display()))?;

    let mut module = if path.extension().is_some_and(|ext| ext == "json") {
        ModuleContent::from_json(&raw)
            .with_context(|| format!("Failed to parse module {}", path.display()))?
    } else {
        ModuleContent {
            title: path
                .file_stem()
                .map(|stem| stem.to_string_lossy().replace(['_', '-'], " "))
                .unwrap_or_default(),
            text: Some(raw),
            locale: None,
        }
    };
    if module.locale.is_none() {
        module.locale = default_locale.map(String::from);
    }
    Ok(module)
}

fn build_book(args: &Args, config: &Config) -> Result<Textbook> {
    let settings = config.pagination;
    let pagination =
        PaginationConfig::new(settings.min_blocks_per_page, settings.max_blocks_per_page)?;

    let module_path = config.resolve_module_path(&args.module);
    let module = load_module(&module_path, config.locale.as_deref())?;
    log::debug!("loaded module {:?} ({})", module.title, module.locale());
    let mut book = Textbook::from_module(&module, pagination)?;

    if let Some(slots_path) = &args.slots {
        let raw = std::fs::read_to_string(slots_path)
            .with_context(|| format!("Failed to read slots {}", slots_path.display()))?;
        book.set_slots(&slots_from_json(&raw)?);
    }
    Ok(book)
}

fn print_non_interactive(args: &Args, book: &Textbook) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(book.pagination())?);
        return Ok(());
    }
    if args.toc {
        for item in book.toc() {
            println!("{}", render::toc_label(item));
        }
    }
    if let Some(query) = &args.search {
        let hits = book.search(query);
        if hits.is_empty() {
            println!("No pages match {query:?}");
        } else {
            let pages: Vec<String> = hits.iter().map(ToString::to_string).collect();
            println!("{}", pages.join(" "));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Read,
    Toc,
    Search,
}

struct App {
    book: Textbook,
    /// 0-based index of the page on screen.
    page: usize,
    mode: Mode,
    toc_state: ListState,
    query: String,
    hits: Vec<usize>,
    status: String,
}

impl App {
    fn new(book: Textbook) -> Self {
        let mut toc_state = ListState::default();
        if !book.toc().is_empty() {
            toc_state.select(Some(0));
        }
        Self {
            book,
            page: 0,
            mode: Mode::Read,
            toc_state,
            query: String::new(),
            hits: Vec::new(),
            status: String::new(),
        }
    }

    fn next_page(&mut self) {
        if self.page + 1 < self.book.page_count() {
            self.page += 1;
        }
    }

    fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    fn go_to(&mut self, page_number: usize) {
        if self.book.page(page_number).is_some() {
            self.page = page_number - 1;
        }
    }

    fn next_toc_entry(&mut self) {
        let len = self.book.toc().len();
        if len == 0 {
            return;
        }
        let i = self.toc_state.selected().map_or(0, |i| (i + 1) % len);
        self.toc_state.select(Some(i));
    }

    fn previous_toc_entry(&mut self) {
        let len = self.book.toc().len();
        if len == 0 {
            return;
        }
        let i = match self.toc_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.toc_state.select(Some(i));
    }

    fn open_selected_toc_entry(&mut self) {
        if let Some(index) = self.toc_state.selected()
            && let Some(item) = self.book.toc().get(index)
        {
            let page = item.page;
            self.go_to(page);
            self.mode = Mode::Read;
        }
    }

    fn run_search(&mut self) {
        self.hits = self.book.search(&self.query);
        self.status = match self.hits.first().copied() {
            Some(first) => {
                self.go_to(first);
                format!("{} page(s) match {:?}", self.hits.len(), self.query)
            }
            None => format!("No pages match {:?}", self.query),
        };
        self.mode = Mode::Read;
    }

    /// Jumps to the next search hit after the current page, wrapping around.
    fn next_hit(&mut self) {
        let current = self.page + 1;
        let target = self
            .hits
            .iter()
            .find(|&&hit| hit > current)
            .or(self.hits.first())
            .copied();
        if let Some(page) = target {
            self.go_to(page);
        }
    }

    /// Returns false when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.mode {
            Mode::Read => match code {
                KeyCode::Char('q') => return false,
                KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') | KeyCode::Char(' ') => {
                    self.next_page()
                }
                KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => self.previous_page(),
                KeyCode::Home => self.page = 0,
                KeyCode::End => self.page = self.book.page_count().saturating_sub(1),
                KeyCode::Char('t') => self.mode = Mode::Toc,
                KeyCode::Char('n') => self.next_hit(),
                KeyCode::Char('/') => {
                    self.query.clear();
                    self.mode = Mode::Search;
                }
                _ => {}
            },
            Mode::Toc => match code {
                KeyCode::Char('q') => return false,
                KeyCode::Down | KeyCode::Char('j') => self.next_toc_entry(),
                KeyCode::Up | KeyCode::Char('k') => self.previous_toc_entry(),
                KeyCode::Enter => self.open_selected_toc_entry(),
                KeyCode::Esc | KeyCode::Char('t') => self.mode = Mode::Read,
                _ => {}
            },
            Mode::Search => match code {
                KeyCode::Enter => self.run_search(),
                KeyCode::Esc => self.mode = Mode::Read,
                KeyCode::Backspace => {
                    self.query.pop();
                }
                KeyCode::Char(c) => self.query.push(c),
                _ => {}
            },
        }
        true
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let book = build_book(&args, &config)?;
    if !args.interactive() {
        return print_non_interactive(&args, &book);
    }
    if book.page_count() == 0 {
        println!("{} has no content", book.title());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(book);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let body = if app.mode == Mode::Toc {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(rows[0])
    } else {
        Layout::default()
            .constraints([Constraint::Percentage(100)])
            .split(rows[0])
    };

    if app.mode == Mode::Toc {
        let items: Vec<ListItem> = app
            .book
            .toc()
            .iter()
            .map(|item| ListItem::new(render::toc_label(item)))
            .collect();
        let toc = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Contents"))
            .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
        f.render_stateful_widget(toc, body[0], &mut app.toc_state);
    }

    let page_area = body[body.len() - 1];
    if let Some(page) = app.book.page(app.page + 1) {
        let title = match &page.section {
            Some(section) => format!(
                "{} · {} · {}/{}",
                app.book.title(),
                section,
                page.page_number,
                app.book.page_count()
            ),
            None => format!(
                "{} · {}/{}",
                app.book.title(),
                page.page_number,
                app.book.page_count()
            ),
        };
        let content = Paragraph::new(render::page_lines(page))
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false });
        f.render_widget(content, page_area);
    }

    let footer = match app.mode {
        Mode::Search => Line::from(vec![
            Span::styled("/", Style::default().fg(Color::Yellow)),
            Span::raw(app.query.clone()),
        ]),
        Mode::Toc => Line::from("↑/k ↓/j: Move | Enter: Open | t/Esc: Back | q: Quit"),
        Mode::Read if !app.status.is_empty() => Line::from(format!(
            "{} | n: Next match | ←/→: Page | t: Contents | /: Search | q: Quit",
            app.status
        )),
        Mode::Read => Line::from("←/h →/l: Page | t: Contents | /: Search | q: Quit"),
    };
    f.render_widget(Paragraph::new(footer), rows[1]);
}
