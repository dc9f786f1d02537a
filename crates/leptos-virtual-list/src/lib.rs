//! Leptos Virtual List
//!
//! Windowed rendering for long lists with a fixed row height.
//! Only rows intersecting the viewport (plus overscan) are mounted.

mod layout;

pub use layout::{Align, WindowLayout};

use leptos::prelude::*;

/// Default number of rows rendered beyond each viewport edge
pub const DEFAULT_OVERSCAN: usize = 2;

/// Viewport height used until the container has been measured
const FALLBACK_VIEWPORT_PX: f64 = 600.0;

/// Pending scroll request (index, alignment)
type ScrollRequest = Option<(usize, Align)>;

/// Handle for driving a [`VirtualList`] from outside
#[derive(Clone, Copy)]
pub struct VirtualListHandle {
    request: RwSignal<ScrollRequest>,
}

impl VirtualListHandle {
    pub fn new() -> Self {
        Self { request: RwSignal::new(None) }
    }

    /// Scroll so that row `index` is visible with the given alignment
    pub fn scroll_to_item(&self, index: usize, align: Align) {
        self.request.set(Some((index, align)));
    }
}

impl Default for VirtualListHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Virtualized vertical list
///
/// # Arguments
/// * `item_count` - Number of rows
/// * `item_size` - Row height in pixels
/// * `overscan` - Extra rows rendered above and below the viewport
/// * `handle` - Optional handle for programmatic scrolling
/// * `row` - Renders the row at an index; the returned view should read
///   its data reactively since rows are keyed by index
#[component]
pub fn VirtualList<F, V>(
    #[prop(into)] item_count: Signal<usize>,
    item_size: f64,
    #[prop(default = DEFAULT_OVERSCAN)] overscan: usize,
    #[prop(optional)] handle: Option<VirtualListHandle>,
    #[prop(into, optional)] class: String,
    row: F,
) -> impl IntoView
where
    F: Fn(usize) -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let layout = WindowLayout::new(item_size, overscan);
    let container = NodeRef::<leptos::html::Div>::new();
    let (scroll_top, set_scroll_top) = signal(0.0f64);
    let (viewport, set_viewport) = signal(FALLBACK_VIEWPORT_PX);

    let measure = move || {
        if let Some(el) = container.get_untracked() {
            let height = el.client_height() as f64;
            if height > 0.0 {
                set_viewport.set(height);
            }
            set_scroll_top.set(el.scroll_top() as f64);
        }
    };

    // Measure once mounted and whenever the window changes size
    Effect::new(move |_| {
        if container.get().is_some() {
            measure();
        }
    });
    let resize = window_event_listener(leptos::ev::resize, move |_| measure());
    on_cleanup(move || resize.remove());

    // Apply scroll requests after the next frame so new rows have their height
    if let Some(handle) = handle {
        Effect::new(move |_| {
            let Some((index, align)) = handle.request.get() else { return };
            handle.request.set(None);
            request_animation_frame(move || {
                let Some(el) = container.get_untracked() else { return };
                let count = item_count.get_untracked();
                let height = el.client_height() as f64;
                let viewport_height = if height > 0.0 { height } else { viewport.get_untracked() };
                let offset = layout.scroll_offset(index, align, el.scroll_top() as f64, viewport_height, count);
                log::debug!("[VirtualList] scroll to row {} -> {}px", index, offset);
                el.set_scroll_top(offset as i32);
                set_scroll_top.set(offset);
            });
        });
    }

    let visible = Memo::new(move |_| {
        layout
            .visible_range(scroll_top.get(), viewport.get(), item_count.get())
            .collect::<Vec<usize>>()
    });

    let inner_style = move || {
        format!(
            "position: relative; width: 100%; height: {}px;",
            layout.total_size(item_count.get())
        )
    };

    view! {
        <div
            node_ref=container
            class=class
            style="overflow-y: auto; position: relative; height: 100%;"
            on:scroll=move |_| measure()
        >
            <div style=inner_style>
                <For
                    each=move || visible.get()
                    key=|index| *index
                    children=move |index| {
                        let style = format!(
                            "position: absolute; left: 0; right: 0; top: {}px; height: {}px;",
                            layout.offset_of(index),
                            layout.item_size,
                        );
                        view! { <div class="virtual-row" style=style>{row(index)}</div> }
                    }
                />
            </div>
        </div>
    }
}
