//! Browser wiring for the settings and play documents
//!
//! Each page keeps its controller in an `Rc<RefCell<_>>` shared by the
//! DOM event closures and re-renders after every event.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, HtmlSelectElement};

use super::storage::WebStore;
use super::{now_iso, random_seed};
use crate::consts::{GAME_PAGE, SETTINGS_PAGE};
use crate::session::{FormState, PlaySession, SettingsForm, SetupPage};
use crate::settings::{Avatar, Difficulty, Theme};
use crate::sim::{Move, RandomPicker};

type SharedSetup = Rc<RefCell<SetupPage<WebStore>>>;
type SharedPlay = Rc<RefCell<PlaySession<WebStore, RandomPicker>>>;

/// Which document is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Settings,
    Game,
}

impl Page {
    /// Detect the page from its markup
    pub fn detect(document: &Document) -> Option<Self> {
        if document.get_element_by_id("save-settings").is_some() {
            Some(Page::Settings)
        } else if query(document, "[data-move]").is_some() {
            Some(Page::Game)
        } else {
            None
        }
    }
}

/// Start whichever page is loaded
pub fn run() {
    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");

    match Page::detect(&document) {
        Some(Page::Settings) => start_settings_page(&document),
        Some(Page::Game) => start_game_page(&document),
        None => log::warn!("Unknown page, nothing to wire up"),
    }
}

// === DOM helpers ===

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_text(document: &Document, selector: &str, text: &str) {
    match query(document, selector) {
        Some(el) => el.set_text_content(Some(text)),
        None => log::warn!("Missing element {}", selector),
    }
}

fn set_disabled(document: &Document, id: &str, disabled: bool) {
    if let Some(btn) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    {
        btn.set_disabled(disabled);
    }
}

fn set_body_theme(document: &Document, class: &str) {
    if let Some(body) = document.body() {
        let classes = body.class_list();
        for theme in Theme::ALL {
            let _ = classes.remove_1(theme.body_class());
        }
        let _ = classes.add_1(class);
    }
}

/// Replace a list's items with one `<li>` per line
fn fill_list(document: &Document, id: &str, lines: impl IntoIterator<Item = String>) {
    let Some(list) = document.get_element_by_id(id) else {
        log::warn!("Missing list #{}", id);
        return;
    };
    list.set_inner_html("");
    for line in lines {
        if let Ok(li) = document.create_element("li") {
            li.set_text_content(Some(&line));
            let _ = list.append_child(&li);
        }
    }
}

fn listen(target: &Element, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| handler());
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn navigate(to: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(to) {
            log::warn!("Navigation to {} failed: {:?}", to, e);
        }
    }
}

// === Settings page ===

fn read_form(document: &Document) -> SettingsForm {
    let name = document
        .get_element_by_id("player-name")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default();
    let avatar = query(document, "input[name=\"avatar\"]:checked")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| Avatar::from_str(&input.value()));
    let difficulty = document
        .get_element_by_id("difficulty")
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        .and_then(|select| Difficulty::from_str(&select.value()));
    let theme = document
        .get_element_by_id("theme-toggle")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|toggle| if toggle.checked() { Theme::Dark } else { Theme::Light });

    SettingsForm {
        name,
        avatar,
        difficulty,
        theme,
    }
}

fn write_form(document: &Document, form: &SettingsForm) {
    if let Some(input) = document
        .get_element_by_id("player-name")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value(&form.name);
    }
    if let Some(avatar) = form.avatar {
        let selector = format!("input[name=\"avatar\"][value=\"{}\"]", avatar.as_str());
        if let Some(radio) =
            query(document, &selector).and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            radio.set_checked(true);
        }
    }
    if let Some(difficulty) = form.difficulty {
        if let Some(select) = document
            .get_element_by_id("difficulty")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        {
            select.set_value(difficulty.as_str());
        }
    }
    if let Some(theme) = form.theme {
        if let Some(toggle) = document
            .get_element_by_id("theme-toggle")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            toggle.set_checked(theme == Theme::Dark);
        }
    }
}

fn render_settings(document: &Document, page: &SetupPage<WebStore>) {
    let greeting = page.greeting().unwrap_or_default();
    set_text(document, "[data-testid=\"greeting\"]", &greeting);
    set_body_theme(document, page.theme_class());
    set_disabled(document, "save-settings", page.form_state() == FormState::Unvalidated);
    set_disabled(document, "start-game", !page.can_start());
}

fn start_settings_page(document: &Document) {
    let page: SharedSetup = Rc::new(RefCell::new(SetupPage::new(WebStore::new())));

    {
        let mut p = page.borrow_mut();
        if p.saved().is_some() {
            write_form(document, p.form());
        }
        // Pick up markup defaults (preselected difficulty/theme)
        p.set_form(read_form(document));
        render_settings(document, &p);
    }

    // Any input change re-reads the whole form
    let mut inputs = query_all(document, "input[name=\"avatar\"]");
    inputs.extend(document.get_element_by_id("player-name"));
    inputs.extend(document.get_element_by_id("difficulty"));
    inputs.extend(document.get_element_by_id("theme-toggle"));
    for input in inputs {
        for event in ["input", "change"] {
            let page = page.clone();
            let doc = document.clone();
            listen(&input, event, move || {
                let mut p = page.borrow_mut();
                p.set_form(read_form(&doc));
                render_settings(&doc, &p);
            });
        }
    }

    if let Some(btn) = document.get_element_by_id("save-settings") {
        let page = page.clone();
        let doc = document.clone();
        listen(&btn, "click", move || {
            let mut p = page.borrow_mut();
            p.set_form(read_form(&doc));
            p.save();
            render_settings(&doc, &p);
        });
    }

    if let Some(btn) = document.get_element_by_id("start-game") {
        let page = page.clone();
        listen(&btn, "click", move || {
            if page.borrow().start().is_some() {
                navigate(GAME_PAGE);
            }
        });
    }

    log::info!("Settings page ready");
}

// === Game page ===

fn render_game(document: &Document, session: &PlaySession<WebStore, RandomPicker>) {
    let score = session.score();
    set_text(document, "#score-player", &score.player_wins.to_string());
    set_text(document, "#score-cpu", &score.cpu_wins.to_string());
    set_text(document, "#score-ties", &score.ties.to_string());
    fill_list(document, "history", score.history.iter().map(|r| r.to_string()));
    fill_list(document, "highscores", session.highscore_lines());
}

fn start_game_page(document: &Document) {
    let Some(session) = PlaySession::start(WebStore::new(), RandomPicker::new(random_seed())) else {
        navigate(SETTINGS_PAGE);
        return;
    };
    let session: SharedPlay = Rc::new(RefCell::new(session));

    {
        let s = session.borrow();
        set_text(document, "[data-testid=\"greeting\"]", &s.greeting());
        set_text(document, "#current-difficulty", s.difficulty_label());
        set_body_theme(document, s.theme_class());
        render_game(document, &s);
    }

    for btn in query_all(document, "[data-move]") {
        let Some(mv) = btn.get_attribute("data-move").and_then(|m| Move::from_str(&m)) else {
            log::warn!("Ignoring move button with unknown data-move");
            continue;
        };
        let session = session.clone();
        let doc = document.clone();
        listen(&btn, "click", move || {
            let mut s = session.borrow_mut();
            s.play(mv);
            render_game(&doc, &s);
        });
    }

    if let Some(btn) = document.get_element_by_id("reset-game") {
        let session = session.clone();
        let doc = document.clone();
        listen(&btn, "click", move || {
            let mut s = session.borrow_mut();
            s.reset();
            render_game(&doc, &s);
        });
    }

    if let Some(btn) = document.get_element_by_id("clear-highscores") {
        let session = session.clone();
        let doc = document.clone();
        listen(&btn, "click", move || {
            let mut s = session.borrow_mut();
            s.clear_highscores();
            render_game(&doc, &s);
        });
    }

    if let Some(window) = web_sys::window() {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            session.borrow_mut().end_session(&now_iso());
        });
        let _ = window
            .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    log::info!("Game page ready");
}
