//! Canvas backdrop rendering the active season's weather particles.
//!
//! The particle set itself is pure library state; this component owns the
//! canvas element, the requestAnimationFrame loop, and the window resize
//! listener, and restarts all of them whenever the season changes.

use gloo_utils::window;
use sketch_timer::particles::{Particle, ParticleField, SeasonStyle, ShapeKind};
use sketch_timer::Season;
use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SeasonalBackgroundProps {
    pub season: Season,
}

/// Full-viewport canvas layer behind the timer card.
#[function_component(SeasonalBackground)]
pub fn seasonal_background(props: &SeasonalBackgroundProps) -> Html {
    let canvas_ref = use_node_ref();
    let style = SeasonStyle::of(props.season);

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.season, move |&season| {
            let runner = canvas_ref
                .cast::<HtmlCanvasElement>()
                .map(|canvas| AnimationRunner::start(canvas, season));
            move || drop(runner)
        });
    }

    html! {
        <div class={classes!("background-layer", style.css_class)}>
            <canvas class="background-canvas" ref={canvas_ref}></canvas>
        </div>
    }
}

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Live animation loop plus its resize listener; dropping the runner
/// cancels the pending frame and unhooks the listener.
struct AnimationRunner {
    frame_id: Rc<Cell<Option<i32>>>,
    frame_closure: FrameClosure,
    resize_closure: Closure<dyn FnMut()>,
}

impl AnimationRunner {
    fn start(canvas: HtmlCanvasElement, season: Season) -> Self {
        // Size the drawing surface before the first frame so particles are
        // never rendered at a stale resolution.
        fit_canvas_to_parent(&canvas);
        let field = Rc::new(RefCell::new(ParticleField::new(
            season,
            canvas.width() as f64,
            canvas.height() as f64,
            &mut rand::rng(),
        )));

        let frame_id = Rc::new(Cell::new(None));
        let frame_closure: FrameClosure = Rc::new(RefCell::new(None));
        {
            let canvas = canvas.clone();
            let field = field.clone();
            let frame_id = frame_id.clone();
            let next = frame_closure.clone();
            *frame_closure.borrow_mut() = Some(Closure::new(move || {
                field.borrow_mut().step(&mut rand::rng());
                // A missing 2d context skips this frame; the next retries.
                if let Some(context) = context_2d(&canvas) {
                    draw_field(&context, &canvas, &field.borrow());
                }
                frame_id.set(request_frame(&next));
            }));
        }
        frame_id.set(request_frame(&frame_closure));

        let resize_closure: Closure<dyn FnMut()> = {
            let canvas = canvas.clone();
            let field = field.clone();
            Closure::new(move || {
                fit_canvas_to_parent(&canvas);
                field.borrow_mut().resize(
                    canvas.width() as f64,
                    canvas.height() as f64,
                    &mut rand::rng(),
                );
            })
        };
        let _ = window()
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());

        AnimationRunner {
            frame_id,
            frame_closure,
            resize_closure,
        }
    }
}

impl Drop for AnimationRunner {
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = window().cancel_animation_frame(id);
        }
        let _ = window().remove_event_listener_with_callback(
            "resize",
            self.resize_closure.as_ref().unchecked_ref(),
        );
        self.frame_closure.borrow_mut().take();
    }
}

fn request_frame(frame_closure: &FrameClosure) -> Option<i32> {
    let slot = frame_closure.borrow();
    let callback = slot.as_ref()?;
    window()
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

/// Match the drawing surface resolution to the canvas' container.
fn fit_canvas_to_parent(canvas: &HtmlCanvasElement) {
    if let Some(parent) = canvas.parent_element() {
        canvas.set_width(parent.client_width().max(0) as u32);
        canvas.set_height(parent.client_height().max(0) as u32);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|object| object.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_field(
    context: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    field: &ParticleField,
) {
    context.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    for particle in field.particles() {
        let _ = draw_particle(context, particle);
    }
}

/// Render one particle. The shape set is closed, so dispatch is exhaustive.
fn draw_particle(
    context: &CanvasRenderingContext2d,
    particle: &Particle,
) -> Result<(), JsValue> {
    context.set_fill_style_str(particle.color);
    match particle.shape {
        ShapeKind::Circle => draw_circle(context, particle),
        ShapeKind::Petal => draw_petal(context, particle),
        ShapeKind::Leaf => draw_leaf(context, particle),
    }
}

fn draw_circle(context: &CanvasRenderingContext2d, particle: &Particle) -> Result<(), JsValue> {
    context.begin_path();
    context.arc(particle.x, particle.y, particle.size / 2.0, 0.0, PI * 2.0)?;
    context.fill();
    Ok(())
}

fn draw_petal(context: &CanvasRenderingContext2d, particle: &Particle) -> Result<(), JsValue> {
    context.save();
    let drawn = (|| {
        context.translate(particle.x, particle.y)?;
        context.rotate(particle.rotation * PI / 180.0)?;
        context.begin_path();
        // Simple oval petal
        context.ellipse(
            0.0,
            0.0,
            particle.size,
            particle.size / 2.0,
            0.0,
            0.0,
            PI * 2.0,
        )?;
        context.fill();
        Ok(())
    })();
    context.restore();
    drawn
}

fn draw_leaf(context: &CanvasRenderingContext2d, particle: &Particle) -> Result<(), JsValue> {
    context.save();
    let drawn = (|| {
        context.translate(particle.x, particle.y)?;
        context.rotate(particle.rotation * PI / 180.0)?;
        context.begin_path();
        // Pointed leaf: two mirrored quadratic curves
        context.move_to(0.0, -particle.size);
        context.quadratic_curve_to(particle.size, 0.0, 0.0, particle.size);
        context.quadratic_curve_to(-particle.size, 0.0, 0.0, -particle.size);
        context.fill();
        Ok(())
    })();
    context.restore();
    drawn
}
