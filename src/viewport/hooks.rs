use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::frame::ViewportWatch;
use super::geometry::{Bounds, Viewport};
use super::tracker::{ActivationPolicy, ActivationTracker, Region};

/// Where a tracker finds the elements behind its keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegionSource {
    /// Elements rendered by the component itself, bound through `NodeRef`s.
    NodeRefs,
    /// Elements elsewhere on the page, looked up by `id` at measure time.
    ElementIds,
}

pub struct ViewportActivation {
    pub active: Option<String>,
    pub activate: Callback<String>,
    refs: Rc<Vec<(&'static str, NodeRef)>>,
}

impl ViewportActivation {
    pub fn node_ref(&self, key: &str) -> NodeRef {
        self.refs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, node)| node.clone())
            .unwrap_or_default()
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.as_deref() == Some(key)
    }
}

/// Tracks which of `keys` is most relevant to the current scroll position.
///
/// Geometry is recomputed at most once per animation frame. Window listeners,
/// the pending frame and the tracker's registrations are all released when
/// the component unmounts.
#[hook]
pub fn use_viewport_activation<P>(
    keys: &'static [&'static str],
    source: RegionSource,
    policy: P,
    initial: Option<&'static str>,
) -> ViewportActivation
where
    P: ActivationPolicy + 'static,
{
    let active = use_state(|| initial.map(str::to_string));
    let tracker = use_mut_ref(move || ActivationTracker::new(policy, initial.map(str::to_string)));
    let refs = use_memo(
        |keys| {
            keys.iter()
                .map(|key| (*key, NodeRef::default()))
                .collect::<Vec<_>>()
        },
        keys,
    );

    {
        let tracker = tracker.clone();
        let refs = refs.clone();
        let setter = active.setter();
        use_effect_with_deps(
            move |_| {
                let regions = refs
                    .iter()
                    .map(|(key, node)| region_for(*key, node.clone(), source))
                    .collect();
                tracker.borrow_mut().register(regions);

                let watch = {
                    let tracker = tracker.clone();
                    ViewportWatch::new(move || {
                        let Some(viewport) = Viewport::current() else {
                            return;
                        };
                        let mut tracker = tracker.borrow_mut();
                        if tracker.on_viewport_change(viewport) {
                            setter.set(tracker.active().map(str::to_string));
                        }
                    })
                };

                move || {
                    drop(watch);
                    tracker.borrow_mut().deregister();
                }
            },
            (),
        );
    }

    let activate = {
        let tracker = tracker.clone();
        let setter = active.setter();
        Callback::from(move |key: String| {
            let mut tracker = tracker.borrow_mut();
            if tracker.activate(&key) {
                setter.set(Some(key));
            }
        })
    };

    ViewportActivation {
        active: (*active).clone(),
        activate,
        refs,
    }
}

fn region_for(key: &'static str, node: NodeRef, source: RegionSource) -> Region {
    match source {
        RegionSource::NodeRefs => Region::new(key, move || {
            node.cast::<Element>().map(|element| Bounds::of_element(&element))
        }),
        RegionSource::ElementIds => Region::new(key, move || {
            web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(key))
                .map(|element| Bounds::of_element(&element))
        }),
    }
}

/// Runs `work` on scroll and resize, at most once per frame, for as long
/// as the component is mounted. Only the first render's closure is used.
#[hook]
pub fn use_viewport_watch<F>(work: F)
where
    F: FnMut() + 'static,
{
    use_effect_with_deps(
        move |_| {
            let watch = ViewportWatch::new(work);
            move || drop(watch)
        },
        (),
    );
}

/// Keeps an `IntersectionObserver` alive and disconnects it on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl VisibilityObserver {
    pub fn observe(
        element: &Element,
        threshold: f64,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |entries: Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change(entry.is_intersecting());
                }
            }
        }) as Box<dyn FnMut(Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&threshold.into());

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(element);
                Some(Self {
                    observer,
                    _callback: callback,
                })
            }
            Err(_) => {
                warn!("IntersectionObserver unavailable, visibility stays unknown");
                None
            }
        }
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether `node` currently intersects the viewport by at least `threshold`.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state(|| false);

    {
        let setter = in_view.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = match node.cast::<Element>() {
                    Some(element) => {
                        VisibilityObserver::observe(&element, threshold, move |visible| {
                            setter.set(visible)
                        })
                    }
                    None => {
                        debug!("Visibility target not rendered, skipping observer");
                        None
                    }
                };
                move || drop(observer)
            },
            node,
        );
    }

    *in_view
}
