use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use futures::StreamExt;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::{NavConfig, RevealConfig};
use crate::controllers::nav::{DomViewport, MenuState, NavController};
use crate::controllers::reveal::{DomObserver, RevealController, RevealEvents, RevealKey, Revealed};
use crate::error::{Result, SiteError};

/// Keys of every target revealed so far on this page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealedSet {
    keys: HashSet<RevealKey>,
}

impl RevealedSet {
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

impl Reducible for RevealedSet {
    type Action = Revealed;

    fn reduce(self: Rc<Self>, Revealed(key): Revealed) -> Rc<Self> {
        if self.keys.contains(&key) {
            return self;
        }
        let mut keys = self.keys.clone();
        keys.insert(key);
        Rc::new(Self { keys })
    }
}

/// Observes the component's reveal targets for as long as it is mounted.
///
/// Must be called by the component that renders the targets: registration
/// runs after its first render. The observer is released on unmount.
#[hook]
pub fn use_reveal(config: RevealConfig) -> UseReducerHandle<RevealedSet> {
    let revealed = use_reducer(RevealedSet::default);

    {
        let dispatcher = revealed.dispatcher();
        use_effect_with_deps(
            move |config: &RevealConfig| {
                let controller = match mount_reveal(config) {
                    Ok((controller, mut events)) => {
                        spawn_local(async move {
                            // Ends once the controller is disposed.
                            while let Some(event) = events.next().await {
                                dispatcher.dispatch(event);
                            }
                        });
                        Some(controller)
                    }
                    Err(err) => {
                        error!("Scroll reveal disabled: {}", err);
                        None
                    }
                };

                move || {
                    if let Some(mut controller) = controller {
                        controller.dispose();
                    }
                }
            },
            config,
        );
    }

    revealed
}

fn mount_reveal(config: &RevealConfig) -> Result<(RevealController<DomObserver>, RevealEvents)> {
    let document = web_sys::window()
        .ok_or(SiteError::NoWindow)?
        .document()
        .ok_or(SiteError::NoDocument)?;
    let (mut controller, events) = RevealController::<DomObserver>::mount(config)?;
    controller.register_matching(&document, config.selector)?;
    Ok((controller, events))
}

/// Navigation state for one navbar instance.
#[derive(Clone)]
pub struct NavHandle {
    controller: Rc<RefCell<NavController<DomViewport>>>,
    menu: UseStateHandle<MenuState>,
}

impl PartialEq for NavHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller) && *self.menu == *other.menu
    }
}

impl NavHandle {
    pub fn scroll_to(&self, section_id: &str) -> Option<f64> {
        let target = self.controller.borrow_mut().scroll_to(section_id);
        self.sync();
        target
    }

    pub fn toggle_menu(&self) {
        let menu = self.controller.borrow_mut().toggle_menu();
        info!("Menu {:?}", menu);
        self.sync();
    }

    pub fn close_menu(&self) {
        self.controller.borrow_mut().close_menu();
        self.sync();
    }

    pub fn menu(&self) -> MenuState {
        *self.menu
    }

    fn sync(&self) {
        self.menu.set(self.controller.borrow().menu());
    }
}

#[hook]
pub fn use_nav_controller(config: NavConfig) -> NavHandle {
    let controller = use_mut_ref(move || NavController::new(DomViewport, &config));
    let menu = use_state(MenuState::default);
    NavHandle { controller, menu }
}
