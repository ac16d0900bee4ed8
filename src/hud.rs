//! DOM text overlays
//!
//! The status and score texts are absolutely positioned elements stacked over
//! the canvas inside the parent element. Text is only written when it changes.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::sim::Overlay;

const STATUS_ID: &str = "status-text";
const SCORE_ID: &str = "score-text";

pub struct Hud {
    status: HtmlElement,
    score: HtmlElement,
    shown: Overlay,
}

/// CSS `translate` equivalent of a text origin: the box is shifted left/up by
/// the origin fraction of its own size
fn origin_transform((ox, oy): (f32, f32)) -> String {
    format!("translate({}%, {}%)", -ox * 100.0, -oy * 100.0)
}

fn find_or_create(
    document: &Document,
    parent: &HtmlElement,
    id: &str,
    style: &str,
) -> Result<HtmlElement, GameError> {
    let dom_err = |e: wasm_bindgen::JsValue| GameError::Renderer(format!("overlay #{}: {:?}", id, e));

    let element = match document.get_element_by_id(id) {
        Some(el) => el,
        None => {
            let el = document.create_element("div").map_err(dom_err)?;
            el.set_id(id);
            parent.append_child(&el).map_err(dom_err)?;
            el
        }
    };
    let element: HtmlElement = element
        .dyn_into()
        .map_err(|_| GameError::Renderer(format!("#{} is not an HTML element", id)))?;
    element.set_attribute("style", style).map_err(dom_err)?;
    Ok(element)
}

impl Hud {
    /// Attach to (or create) both overlay elements inside `parent`
    pub fn new(document: &Document, parent: &HtmlElement, config: &GameConfig) -> Result<Self, GameError> {
        let center_x = config.width as f32 / 2.0;
        let center_y = config.height as f32 / 2.0;
        let common = "position: absolute; white-space: pre; text-align: center; \
                      font-family: Courier, monospace; pointer-events: none;";

        let status_style = format!(
            "{} left: {}px; top: {}px; transform: {}; font-size: 32px; color: #fff;",
            common,
            center_x,
            center_y,
            origin_transform(Overlay::STATUS_ORIGIN)
        );
        let score_style = format!(
            "{} left: {}px; top: {}px; transform: {}; font-size: 20px; color: #dd2;",
            common,
            center_x,
            Overlay::SCORE_TOP,
            origin_transform(Overlay::SCORE_ORIGIN)
        );

        let status = find_or_create(document, parent, STATUS_ID, &status_style)?;
        let score = find_or_create(document, parent, SCORE_ID, &score_style)?;

        let shown = Overlay {
            status: String::new(),
            score: String::new(),
        };
        status.set_text_content(Some(""));
        score.set_text_content(Some(""));

        Ok(Self { status, score, shown })
    }

    /// Show an out-of-band message (startup failure) in the status slot
    pub fn show_status(&mut self, text: &str) {
        self.status.set_text_content(Some(text));
        self.shown.status = text.to_string();
    }

    /// Bring the DOM in line with the overlay state
    pub fn update(&mut self, overlay: &Overlay) {
        if self.shown.status != overlay.status {
            self.status.set_text_content(Some(&overlay.status));
            self.shown.status.clone_from(&overlay.status);
        }
        if self.shown.score != overlay.score {
            self.score.set_text_content(Some(&overlay.score));
            self.shown.score.clone_from(&overlay.score);
        }
    }
}
