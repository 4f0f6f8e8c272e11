//! Browser adapters for the widget state machines.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. Everything browser-specific lives
//! here: resolving container keys to elements, scheduling the deferred drag
//! rebuild, turning wheel events into a `Direction`, and toggling the active
//! carousel class. The modules it wraps stay testable without a DOM.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    CustomEvent, CustomEventInit, Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    WheelEvent,
};

use crate::carousel::{Direction, ItemSurface};
use crate::config::WidgetConfig;
use crate::consts::DROP_COMPLETE_EVENT;
use crate::item::ItemId;
use crate::reorder::{BusyError, ContainerKey, ContainerRegistry, MoveEvent, SharedReorder};

/// Route `log` records to the browser console and report panics there.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::debug!("console logger already installed: {err}");
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// ISO date (`YYYY-MM-DD`) of the browser's current time, in UTC.
#[must_use]
pub fn today_iso_date() -> String {
    let stamp = String::from(js_sys::Date::new_0().to_iso_string());
    stamp.get(..10).map_or_else(|| stamp.clone(), str::to_owned)
}

// =============================================================
// Reorder
// =============================================================

/// Resolves container keys to elements whose `id` is the key text.
pub struct DomRegistry {
    document: Document,
}

impl DomRegistry {
    #[must_use]
    pub fn from_window() -> Option<Self> {
        document().map(|document| Self { document })
    }
}

impl ContainerRegistry for DomRegistry {
    type Handle = Element;

    fn resolve(&self, key: &ContainerKey) -> Option<Element> {
        self.document.get_element_by_id(key.as_str())
    }

    fn items(&self, handle: &Element) -> Vec<ItemId> {
        let children = handle.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .map(|child| child.id())
            .filter(|id| !id.is_empty())
            .map(ItemId::from)
            .collect()
    }
}

/// Detail payload of the `dropcomplete` event.
#[derive(Serialize)]
struct DropCompleteDetail<'a> {
    id: &'a str,
    target: &'a str,
    #[serde(flatten)]
    event: &'a MoveEvent,
}

fn dispatch_drop_complete(event: &MoveEvent) {
    let Some(target) = document().and_then(|d| d.get_element_by_id(event.target_container_key.as_str())) else {
        log::debug!("drop target {} vanished before dispatch", event.target_container_key);
        return;
    };
    let detail = DropCompleteDetail {
        id: event.item_id.as_str(),
        target: event.target_container_key.as_str(),
        event,
    };
    let json = match serde_json::to_string(&detail) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("dropcomplete detail not serializable: {err}");
            return;
        }
    };
    let detail = match js_sys::JSON::parse(&json) {
        Ok(detail) => detail,
        Err(err) => {
            log::warn!("dropcomplete detail not parseable: {err:?}");
            return;
        }
    };
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&detail);
    match CustomEvent::new_with_event_init_dict(DROP_COMPLETE_EVENT, &init) {
        Ok(custom) => {
            if let Err(err) = target.dispatch_event(&custom) {
                log::warn!("dropcomplete dispatch failed: {err:?}");
            }
        }
        Err(err) => log::warn!("dropcomplete event construction failed: {err:?}"),
    }
}

/// DOM-backed reorder engine with a one-tick deferred rebuild.
///
/// Clones share one engine, so a clone can live inside a `dropcomplete`
/// handler and reconfigure from there.
#[derive(Clone)]
pub struct DomReorder {
    shared: SharedReorder<Element>,
    pending: Rc<RefCell<Option<Timeout>>>,
    delay_ms: u32,
}

impl DomReorder {
    #[must_use]
    pub fn new(config: &WidgetConfig) -> Self {
        Self { shared: SharedReorder::new(), pending: Rc::default(), delay_ms: config.rebuild_delay_ms }
    }

    /// Register a move listener. It runs before the `dropcomplete` event fires.
    pub fn subscribe(&self, listener: impl FnMut(&MoveEvent) + 'static) -> Result<(), BusyError> {
        self.shared.subscribe(listener)
    }

    /// Tear down the current binding and rebind to `keys` after the configured delay.
    ///
    /// A configure issued before the previous delay elapsed cancels it.
    pub fn configure(&self, keys: Vec<ContainerKey>) -> Result<(), BusyError> {
        let mut pending = self.pending.try_borrow_mut()?;
        let ticket = self.shared.configure(keys)?;
        let shared = self.shared.clone();
        let timeout = Timeout::new(self.delay_ms, move || {
            let Some(registry) = DomRegistry::from_window() else {
                log::warn!("no document; drag binding not rebuilt");
                return;
            };
            if let Err(err) = shared.rebuild(ticket, &registry) {
                log::warn!("drag rebuild skipped: {err}");
            }
        });
        // Replacing the superseded timeout cancels it.
        *pending = Some(timeout);
        Ok(())
    }

    /// Re-read item order from the bound containers after the host re-rendered
    /// their children. Returns whether a binding was live.
    pub fn refresh(&self) -> Result<bool, BusyError> {
        let Some(registry) = DomRegistry::from_window() else {
            log::debug!("no document; nothing to refresh");
            return Ok(false);
        };
        self.shared.refresh(&registry)
    }

    /// Feed a completed drop from the drag primitive.
    ///
    /// Listeners and the bubbling `dropcomplete` event both run after the
    /// engine is released.
    pub fn on_drop(
        &self,
        item: &str,
        source: &str,
        target: &str,
        sibling: Option<&str>,
    ) -> Result<Option<MoveEvent>, BusyError> {
        let sibling = sibling.map(ItemId::from);
        let event = self.shared.on_drop(
            &ItemId::from(item),
            &ContainerKey::from(source),
            &ContainerKey::from(target),
            sibling.as_ref(),
        )?;
        if let Some(event) = &event {
            dispatch_drop_complete(event);
        }
        Ok(event)
    }
}

// =============================================================
// Carousel
// =============================================================

/// Map a wheel event (or its absence) to a carousel direction.
///
/// `deltaY` is positive when scrolling down, the opposite sign of the legacy
/// `wheelDelta` that `Direction::from_wheel_delta` expects.
#[must_use]
pub fn direction_from_wheel(event: Option<&WheelEvent>) -> Direction {
    Direction::from_wheel_delta(event.map(|e| -e.delta_y()))
}

/// Stop the page from scrolling while the wheel drives the carousel.
///
/// Returns whether the listener was installed.
pub fn suppress_wheel_scroll(element_id: &str) -> bool {
    let Some(element) = document().and_then(|d| d.get_element_by_id(element_id)) else {
        log::debug!("wheel host #{element_id} not mounted");
        return false;
    };
    let handler = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| event.prevent_default());
    if let Err(err) = element.add_event_listener_with_callback_and_bool("wheel", handler.as_ref().unchecked_ref(), true)
    {
        log::warn!("wheel listener not installed: {err:?}");
        return false;
    }
    handler.forget();
    true
}

/// Carousel items matched by a selector, marked with a class.
pub struct DomItemSurface {
    elements: Vec<Element>,
    active_class: String,
}

impl DomItemSurface {
    /// Collect the items matching the configured selector, in document order.
    #[must_use]
    pub fn collect(config: &WidgetConfig) -> Self {
        let mut elements = Vec::new();
        match document().map(|d| d.query_selector_all(&config.item_selector)) {
            Some(Ok(nodes)) => {
                for i in 0..nodes.length() {
                    if let Some(Ok(element)) = nodes.get(i).map(JsCast::dyn_into::<Element>) {
                        elements.push(element);
                    }
                }
            }
            Some(Err(err)) => log::warn!("bad item selector {}: {err:?}", config.item_selector),
            None => log::debug!("no document; carousel surface is empty"),
        }
        Self { elements, active_class: config.active_class.clone() }
    }

    /// Ids of the collected items, in order.
    #[must_use]
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.elements.iter().map(|e| ItemId::from(e.id())).collect()
    }
}

impl ItemSurface for DomItemSurface {
    fn mark(&mut self, position: usize, _item: &ItemId, active: bool) {
        let Some(element) = self.elements.get(position) else {
            return;
        };
        let classes = element.class_list();
        let result = if active { classes.add_1(&self.active_class) } else { classes.remove_1(&self.active_class) };
        if let Err(err) = result {
            log::warn!("class toggle failed: {err:?}");
        }
    }

    fn bring_into_view(&mut self, position: usize, _item: &ItemId) {
        let Some(element) = self.elements.get(position) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_block(ScrollLogicalPosition::Nearest);
        options.set_inline(ScrollLogicalPosition::Nearest);
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
