use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Date;
use shared::constants::SPIN_DURATION_MS;
use shared::{Lot, SpinError, SpinOutcome, SpinPolicy, WheelSession};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// What a wheel surface needs to render and trigger a spin.
#[derive(Clone, PartialEq)]
pub struct WheelSpinHandle {
    /// Rotation to draw this frame.
    pub rotation: f64,
    pub is_spinning: bool,
    pub has_spun: bool,
    pub policy: SpinPolicy,
    pub revealed: Option<SpinOutcome>,
    pub error: Option<SpinError>,
    pub spin: Callback<Vec<Lot>>,
}

impl WheelSpinHandle {
    pub fn can_spin(&self) -> bool {
        !self.is_spinning && !(self.policy == SpinPolicy::OncePerSession && self.has_spun)
    }
}

/// One spin hook for every wheel on screen: the play page uses
/// `OncePerSession`, the owner's preview uses `Unlimited`.
///
/// `on_reveal` fires once the animation has run its full duration.
#[hook]
pub fn use_wheel_spin(policy: SpinPolicy, on_reveal: Callback<SpinOutcome>) -> WheelSpinHandle {
    let session = use_mut_ref(|| WheelSession::new(policy));
    let rotation = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);
    let has_spun = use_state(|| false);
    let revealed = use_state(|| None::<SpinOutcome>);
    let error = use_state(|| None::<SpinError>);

    let spin = {
        let session = session.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let has_spun = has_spun.clone();
        let revealed = revealed.clone();
        let error = error.clone();

        Callback::from(move |lots: Vec<Lot>| {
            let from_rotation = session.borrow().rotation;
            let started = session.borrow_mut().start_spin(&lots, &mut rand::thread_rng());
            if let Err(e) = started {
                error.set(Some(e));
                return;
            }

            error.set(None);
            revealed.set(None);
            is_spinning.set(true);

            let start_time = Date::now();
            let duration = SPIN_DURATION_MS as f64;

            let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let g = f.clone();

            let session = session.clone();
            let rotation = rotation.clone();
            let is_spinning = is_spinning.clone();
            let has_spun = has_spun.clone();
            let revealed = revealed.clone();
            let on_reveal = on_reveal.clone();

            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let progress = ((Date::now() - start_time) / duration).min(1.0);
                rotation.set(session.borrow().animated_rotation(from_rotation, progress));

                if progress < 1.0 {
                    if let Some(window) = web_sys::window() {
                        if let Some(callback) = f.borrow().as_ref() {
                            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
                        }
                    }
                    return;
                }

                let outcome = session.borrow_mut().complete_spin();
                is_spinning.set(false);
                has_spun.set(true);
                if let Some(outcome) = outcome {
                    revealed.set(Some(outcome.clone()));
                    on_reveal.emit(outcome);
                }
                // Release the frame callback; wasm-bindgen defers the free
                // until this invocation returns.
                f.borrow_mut().take();
            }) as Box<dyn FnMut()>));

            if let Some(window) = web_sys::window() {
                if let Some(callback) = g.borrow().as_ref() {
                    let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
                }
            }
        })
    };

    WheelSpinHandle {
        rotation: *rotation,
        is_spinning: *is_spinning,
        has_spun: *has_spun,
        policy,
        revealed: (*revealed).clone(),
        error: *error,
        spin,
    }
}
