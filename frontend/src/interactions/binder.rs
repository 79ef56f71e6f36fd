use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::cta::{cta_selector, CtaKind};
use super::region::PageRegion;
use crate::analytics::dwell::VISIBILITY_THRESHOLD;
use crate::config;
use crate::session::SessionHandle;

type ClickHandler = Closure<dyn FnMut()>;
type VisibilityHandler = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Listeners attached to one rendering of the page. Dropping it detaches
/// them and stops the observer, so a remount can bind the new nodes.
pub struct PageBindings {
    session: SessionHandle,
    links: Vec<(Element, ClickHandler)>,
    sections: Option<(IntersectionObserver, VisibilityHandler)>,
}

impl Drop for PageBindings {
    fn drop(&mut self) {
        for (link, on_click) in &self.links {
            if let Err(err) = link.remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
                debug!("Could not detach CTA listener: {:?}", err);
            }
        }
        if let Some((observer, _)) = &self.sections {
            observer.disconnect();
        }
        self.session.clear_dwell();
        debug!("Unbound {} CTA links", self.links.len());
    }
}

/// Starts tracking if consent allows it and wires the rendered page: CTA
/// link clicks and section dwell. Keep the result alive as long as the page.
pub fn activate(session: &SessionHandle) -> Option<PageBindings> {
    if !session.start_tracking() {
        return None;
    }
    let document = window().and_then(|w| w.document())?;
    Some(PageBindings {
        session: session.clone(),
        links: bind_cta_links(&document, session),
        sections: watch_sections(&document, session),
    })
}

fn region_of(element: &Element) -> PageRegion {
    PageRegion::resolve(|selector| matches!(element.closest(selector), Ok(Some(_))))
}

fn bind_cta_links(document: &Document, session: &SessionHandle) -> Vec<(Element, ClickHandler)> {
    let links = match document.query_selector_all(&cta_selector()) {
        Ok(links) => links,
        Err(_) => return Vec::new(),
    };

    let mut bound = Vec::new();
    for index in 0..links.length() {
        let Some(link) = links.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(kind) = link.get_attribute("href").as_deref().and_then(CtaKind::from_href) else {
            continue;
        };

        let session = session.clone();
        let target = link.clone();
        let on_click = Closure::wrap(Box::new(move || {
            session.cta_clicked(kind, region_of(&target));
        }) as Box<dyn FnMut()>);

        if link
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_ok()
        {
            bound.push((link, on_click));
        }
    }
    debug!("Bound {} CTA links", bound.len());
    bound
}

fn watch_sections(document: &Document, session: &SessionHandle) -> Option<(IntersectionObserver, VisibilityHandler)> {
    let session = session.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            session.section_visibility(&entry.target().id(), entry.intersection_ratio());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            debug!("IntersectionObserver unavailable: {:?}", err);
            return None;
        }
    };

    for id in config::TRACKED_SECTIONS {
        match document.get_element_by_id(id) {
            Some(section) => observer.observe(&section),
            None => debug!("Section #{} not on page, skipping", id),
        }
    }
    Some((observer, callback))
}
