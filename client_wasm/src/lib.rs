//! Browser shell for the table tennis game.
//!
//! Thin glue over `game_core`: looks up the page elements, wires pointer
//! and selector events into the simulation, and drives a
//! requestAnimationFrame loop that renders the current state and then
//! advances one tick.
//!
//! Expected page elements: a `pingpong` canvas, `player-score` and
//! `ai-score` text nodes, a `paddle-select` dropdown with
//! normal/wide/slim options, and a `theme-toggle` button.

pub mod game;
pub mod scene;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
mod app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{
        CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement, HtmlSelectElement,
        MouseEvent, Window,
    };

    use crate::game::LocalGame;
    use crate::renderer::Renderer;
    use crate::scene;
    use crate::theme::Theme;

    struct App {
        game: LocalGame,
        theme: Theme,
        renderer: Renderer,
        human_score: Element,
        opponent_score: Element,
    }

    impl App {
        /// Draw the current state; rendering keeps running during pauses
        fn render_frame(&self) -> Result<(), JsValue> {
            let ops = scene::build(&self.game, self.theme);
            self.renderer.draw(&ops)
        }

        /// Full replace of both score text nodes
        fn update_score_text(&self) {
            self.human_score
                .set_text_content(Some(&self.game.score.human.to_string()));
            self.opponent_score
                .set_text_content(Some(&self.game.score.opponent.to_string()));
        }
    }

    fn element_by_id(document: &web_sys::Document, id: &str) -> Result<Element, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing page element #{id}")))
    }

    fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) {
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .expect("requestAnimationFrame should be available");
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no body")?;

        let canvas: HtmlCanvasElement = element_by_id(&document, "pingpong")?.dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let app = Rc::new(RefCell::new(App {
            game: LocalGame::new(js_sys::Date::now() as u64),
            theme: Theme::Light,
            renderer: Renderer::new(ctx),
            human_score: element_by_id(&document, "player-score")?,
            opponent_score: element_by_id(&document, "ai-score")?,
        }));

        app.borrow().update_score_text();
        body.set_class_name(Theme::Light.body_class());

        // Pointer: translate viewport Y into surface-local Y. Only the
        // latest position before a tick matters.
        {
            let app = app.clone();
            let canvas_ref = canvas.clone();
            let on_mousemove = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let rect = canvas_ref.get_bounding_client_rect();
                let y = event.client_y() as f32 - rect.top() as f32;
                app.borrow_mut().game.set_pointer_y(y);
            });
            canvas
                .add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref())?;
            on_mousemove.forget();
        }

        // Paddle style selector
        {
            let app = app.clone();
            let select: HtmlSelectElement = element_by_id(&document, "paddle-select")?.dyn_into()?;
            let select_ref = select.clone();
            let on_change = Closure::<dyn FnMut()>::new(move || {
                app.borrow_mut().game.select_style(&select_ref.value());
            });
            select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
            on_change.forget();
        }

        // Theme toggle: flips colors, the body class, and its own label
        {
            let app = app.clone();
            let toggle = element_by_id(&document, "theme-toggle")?;
            let toggle_ref = toggle.clone();
            let body_ref: HtmlElement = body.clone();
            let on_click = Closure::<dyn FnMut()>::new(move || {
                let mut app = app.borrow_mut();
                app.theme = app.theme.toggled();
                body_ref.set_class_name(app.theme.body_class());
                toggle_ref.set_text_content(Some(app.theme.toggle_label()));
            });
            toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
        }

        // Frame loop: render first, then advance the simulation
        {
            let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let callback_ref = callback.clone();
            let app = app.clone();
            let loop_window = window.clone();

            *callback.borrow_mut() = Some(Closure::new(move || {
                {
                    let mut app = app.borrow_mut();
                    if let Err(err) = app.render_frame() {
                        web_sys::console::error_1(&err);
                    }
                    app.game.tick();
                    if app.game.events.score_changed() {
                        app.update_score_text();
                    }
                }
                request_frame(
                    &loop_window,
                    callback_ref
                        .borrow()
                        .as_ref()
                        .expect("frame closure is set"),
                );
            }));

            request_frame(
                &window,
                callback.borrow().as_ref().expect("frame closure is set"),
            );
        }

        web_sys::console::log_1(&"table tennis client started".into());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    app::run()
}
