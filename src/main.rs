//! Product Showcase entry point
//!
//! On the web: binds the showcase to the page and runs the frame loop.
//! Natively: runs a headless walkthrough of the carousel.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, HtmlAnchorElement, HtmlElement, HtmlImageElement, KeyboardEvent,
        MouseEvent, TouchEvent,
    };

    use product_showcase::carousel::SlotTransform;
    use product_showcase::input::{Command, SwipeTracker, command_for_key};
    use product_showcase::renderer::SlideRenderer;
    use product_showcase::rotator::Rotator;
    use product_showcase::view::{PROGRESS_STYLE_ID, ProductView};
    use product_showcase::{Catalog, Product, Settings, Showcase, ShowcaseEvent};

    /// Slides rendered as `<li><img></li>` inside the `.products` list
    struct DomSlides {
        document: Document,
        container: Element,
    }

    impl DomSlides {
        fn build(&self, product: &Product, relative: i32) -> Option<HtmlElement> {
            let li: HtmlElement = self.document.create_element("li").ok()?.dyn_into().ok()?;
            let img: HtmlImageElement = self.document.create_element("img").ok()?.dyn_into().ok()?;
            img.set_src(&product.image);
            img.set_alt(&product.name);
            li.append_child(&img).ok()?;
            let _ = li.set_attribute("data-relative-index", &relative.to_string());
            Some(li)
        }
    }

    fn apply_transform(el: &HtmlElement, t: SlotTransform) {
        let style = el.style();
        let _ = style.set_property(
            "transform",
            &format!(
                "translate({:.2}px, {:.2}px) scale({:.4})",
                t.offset.x, t.offset.y, t.scale
            ),
        );
        let _ = style.set_property("z-index", &t.z_index.to_string());
        let _ = style.set_property("opacity", &format!("{:.3}", t.opacity));
    }

    impl SlideRenderer for DomSlides {
        /// `None` when the element could not be created; that slide stays invisible
        type Handle = Option<HtmlElement>;

        fn create(&mut self, product: &Product, relative: i32, transform: SlotTransform) -> Self::Handle {
            let Some(li) = self.build(product, relative) else {
                log::warn!("Failed to create slide for {}", product.name);
                return None;
            };
            apply_transform(&li, transform);
            if self.container.append_child(&li).is_err() {
                log::warn!("Failed to attach slide for {}", product.name);
                return None;
            }
            Some(li)
        }

        fn apply(&mut self, handle: &Self::Handle, transform: SlotTransform) {
            if let Some(li) = handle {
                apply_transform(li, transform);
            }
        }

        fn destroy(&mut self, handle: Self::Handle) {
            if let Some(li) = handle {
                li.remove();
            }
        }
    }

    fn find(document: &Document, selector: &str) -> Option<Element> {
        let el = document.query_selector(selector).ok().flatten();
        if el.is_none() {
            log::warn!("Missing {} - dependent display disabled", selector);
        }
        el
    }

    fn find_all(document: &Document, selector: &str) -> Vec<Element> {
        let Ok(list) = document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn set_text(el: &Option<Element>, text: &str) {
        if let Some(el) = el {
            el.set_text_content(Some(text));
        }
    }

    fn set_image(el: &Option<Element>, src: &str, alt: &str) {
        if let Some(img) = el.as_ref().and_then(|e| e.dyn_ref::<HtmlImageElement>()) {
            img.set_src(src);
            img.set_alt(alt);
        }
    }

    fn set_style(el: &Option<Element>, property: &str, value: &str) {
        if let Some(el) = el.as_ref().and_then(|e| e.dyn_ref::<HtmlElement>()) {
            let _ = el.style().set_property(property, value);
        }
    }

    /// The bar fill is a pseudo-element, so it is sized through a rule in
    /// `<style id="progress-style">`, created in `<head>` on first use
    fn progress_style(document: &Document) -> Option<Element> {
        find(document, ".progress-bar")?;
        if let Some(style) = document.get_element_by_id(PROGRESS_STYLE_ID) {
            return Some(style);
        }
        let style = document.create_element("style").ok()?;
        style.set_id(PROGRESS_STYLE_ID);
        let head = document.head()?;
        head.append_child(&style).ok()?;
        Some(style)
    }

    fn set_class(el: &Option<Element>, class: &str, on: bool) {
        if let Some(el) = el {
            let _ = el.class_list().toggle_with_force(class, on);
        }
    }

    /// Display elements; each one is optional
    struct Page {
        product_name: Option<Element>,
        preview: Option<Element>,
        preview_name: Option<Element>,
        preview_img: Option<Element>,
        preview_tag: Option<Element>,
        preview_url: Option<Element>,
        banner: Option<Element>,
        banner_img: Option<Element>,
        price_value: Option<Element>,
        rating_value: Option<Element>,
        stars: Option<Element>,
        badge: Option<Element>,
        wishlist_btn: Option<Element>,
        wishlist_count: Option<Element>,
        /// `<style>` whose rule sizes the `.progress-bar::after` fill
        progress_style: Option<Element>,
        current_index: Option<Element>,
        total_items: Option<Element>,
        prev_btn: Option<Element>,
        next_btn: Option<Element>,
    }

    impl Page {
        fn bind(document: &Document) -> Self {
            Self {
                product_name: find(document, ".product-name p"),
                preview: find(document, ".product-preview"),
                preview_name: find(document, ".product-preview-name p"),
                preview_img: find(document, ".product-preview-img img"),
                preview_tag: find(document, ".product-preview-tag p"),
                preview_url: find(document, ".product-url .btn a"),
                banner: find(document, ".product-banner"),
                banner_img: find(document, ".product-banner img"),
                price_value: find(document, ".price-value"),
                rating_value: find(document, ".rating-value"),
                stars: find(document, ".stars"),
                badge: find(document, ".product-badge"),
                wishlist_btn: find(document, ".wishlist-btn"),
                wishlist_count: find(document, ".wishlist-count"),
                progress_style: progress_style(document),
                current_index: find(document, ".current-index"),
                total_items: find(document, ".total-items"),
                prev_btn: find(document, ".nav-btn.prev"),
                next_btn: find(document, ".nav-btn.next"),
            }
        }

        fn show_product(&self, view: &ProductView) {
            set_text(&self.product_name, &view.name);
            set_text(&self.preview_name, &view.name);
            set_image(&self.preview_img, &view.image, &view.name);
            set_text(&self.preview_tag, &view.tag);
            if let Some(a) = self
                .preview_url
                .as_ref()
                .and_then(|e| e.dyn_ref::<HtmlAnchorElement>())
            {
                a.set_href(&view.url);
            }
            set_image(&self.banner_img, &view.image, &view.name);

            if let Some(stars) = &self.stars {
                let mut html = String::new();
                for _ in 0..view.stars.full {
                    html.push_str(r#"<ion-icon name="star"></ion-icon>"#);
                }
                if view.stars.half {
                    html.push_str(r#"<ion-icon name="star-half"></ion-icon>"#);
                }
                for _ in 0..view.stars.empty {
                    html.push_str(r#"<ion-icon name="star-outline"></ion-icon>"#);
                }
                stars.set_inner_html(&html);
            }
            set_text(&self.rating_value, &view.rating_label);

            match &view.badge {
                Some(badge) => {
                    set_text(&self.badge, badge);
                    set_style(&self.badge, "display", "inline-block");
                }
                None => set_style(&self.badge, "display", "none"),
            }

            self.show_wishlisted(view.wishlisted);

            set_text(&self.current_index, &view.progress.position.to_string());
            set_text(&self.total_items, &view.progress.total.to_string());
            set_text(&self.progress_style, &view.progress.fill_rule());
        }

        fn show_wishlisted(&self, active: bool) {
            set_class(&self.wishlist_btn, "active", active);
            if let Some(icon) = self
                .wishlist_btn
                .as_ref()
                .and_then(|b| b.query_selector("ion-icon").ok().flatten())
            {
                let name = if active { "heart" } else { "heart-outline" };
                let _ = icon.set_attribute("name", name);
            }
        }

        fn apply(&self, event: &ShowcaseEvent) {
            match event {
                ShowcaseEvent::ProductChanged(view) => self.show_product(view),
                ShowcaseEvent::PriceCounter(price) => {
                    set_text(&self.price_value, &price.to_string());
                }
                ShowcaseEvent::PreviewMoved(p) => {
                    set_style(
                        &self.preview,
                        "transform",
                        &format!("translateY({:.2}%)", 100.0 - 150.0 * p),
                    );
                    set_style(&self.banner, "opacity", &format!("{:.3}", p));
                }
                ShowcaseEvent::PreviewPhaseChanged(phase) => {
                    if let Some(el) = &self.preview {
                        let _ = el.set_attribute("data-phase", phase.as_str());
                    }
                }
                ShowcaseEvent::NavigationLocked(locked) => {
                    set_class(&self.prev_btn, "disabled", *locked);
                    set_class(&self.next_btn, "disabled", *locked);
                }
                ShowcaseEvent::WishlistChanged { active, count, .. } => {
                    self.show_wishlisted(*active);
                    set_text(&self.wishlist_count, &count.to_string());
                }
            }
        }
    }

    /// Testimonial cards with dot navigation
    struct Testimonials {
        rotator: Rotator,
        cards: Vec<Element>,
        dots: Vec<Element>,
    }

    impl Testimonials {
        fn show(&self) {
            let index = self.rotator.index();
            for (i, card) in self.cards.iter().enumerate() {
                let _ = card.class_list().toggle_with_force("active", i == index);
            }
            for (i, dot) in self.dots.iter().enumerate() {
                let _ = dot.class_list().toggle_with_force("active", i == index);
            }
        }
    }

    /// Everything the page handlers share
    struct App {
        showcase: Showcase<DomSlides>,
        page: Page,
        swipe: SwipeTracker,
        testimonials: Testimonials,
        last_time: f64,
    }

    impl App {
        fn flush(&mut self) {
            for event in self.showcase.drain_events() {
                self.page.apply(&event);
            }
        }

        fn dispatch(&mut self, command: Command) {
            if self.showcase.dispatch(command) {
                self.flush();
            }
        }
    }

    fn load_catalog(document: &Document) -> Catalog {
        let json = document
            .get_element_by_id("product-catalog")
            .and_then(|el| el.text_content());
        match json.map(|j| Catalog::from_json(&j)) {
            Some(Ok(catalog)) => {
                log::info!("Loaded {} products from #product-catalog", catalog.len());
                catalog
            }
            Some(Err(e)) => {
                log::warn!("Invalid #product-catalog ({}), using built-in catalog", e);
                Catalog::builtin()
            }
            None => Catalog::builtin(),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Product Showcase starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document - showcase disabled");
            return;
        };
        let Some(container) = document.query_selector(".products").ok().flatten() else {
            log::warn!("Missing .products - carousel disabled");
            return;
        };

        let settings = Settings::load();
        let catalog = load_catalog(&document);
        let slides = DomSlides {
            document: document.clone(),
            container,
        };
        let showcase = match Showcase::new(catalog, settings.clone(), slides) {
            Ok(showcase) => showcase,
            Err(e) => {
                log::error!("Showcase disabled: {}", e);
                return;
            }
        };

        let cards = find_all(&document, ".testimonial-card");
        let testimonials = Testimonials {
            rotator: Rotator::new(cards.len(), settings.testimonial_interval),
            cards,
            dots: find_all(&document, ".testimonials-dots .dot"),
        };

        let app = Rc::new(RefCell::new(App {
            showcase,
            page: Page::bind(&document),
            swipe: SwipeTracker::new(settings.swipe_threshold),
            testimonials,
            last_time: 0.0,
        }));
        app.borrow_mut().flush();

        setup_navigation(&document, app.clone());
        setup_preview(&document, app.clone());
        setup_wishlist(&document, app.clone());
        setup_testimonials(&document, app.clone());

        request_animation_frame(app);

        log::info!("Product Showcase running!");
    }

    fn on_click(target: &Element, app: Rc<RefCell<App>>, command: Command) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            app.borrow_mut().dispatch(command);
        });
        let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_navigation(document: &Document, app: Rc<RefCell<App>>) {
        // Buttons
        if let Some(btn) = document.query_selector(".nav-btn.prev").ok().flatten() {
            on_click(&btn, app.clone(), Command::Previous);
        }
        if let Some(btn) = document.query_selector(".nav-btn.next").ok().flatten() {
            on_click(&btn, app.clone(), Command::Next);
        }

        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(command) = command_for_key(&event.key()) {
                    app.borrow_mut().dispatch(command);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch swipe
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().get(0) {
                    app.borrow_mut().swipe.start(touch.screen_x() as f32);
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().get(0) {
                    let mut a = app.borrow_mut();
                    if let Some(command) = a.swipe.finish(touch.screen_x() as f32) {
                        a.dispatch(command);
                    }
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_preview(document: &Document, app: Rc<RefCell<App>>) {
        if let Some(controller) = document.query_selector(".controller-inner").ok().flatten() {
            on_click(&controller, app, Command::TogglePreview);
        } else {
            log::warn!("Missing .controller-inner - preview disabled");
        }
    }

    fn setup_wishlist(document: &Document, app: Rc<RefCell<App>>) {
        if let Some(btn) = document.query_selector(".wishlist-btn").ok().flatten() {
            on_click(&btn, app.clone(), Command::ToggleWishlist);
        }

        if let Some(counter) = document.query_selector(".wishlist-counter").ok().flatten() {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let names = app.borrow().showcase.wishlist_names();
                if !names.is_empty() {
                    log::info!("Wishlist items: {}", names.join(", "));
                }
            });
            let _ = counter.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_testimonials(document: &Document, app: Rc<RefCell<App>>) {
        if app.borrow().testimonials.rotator.is_empty() {
            return;
        }

        if let Some(btn) = document.query_selector(".testimonial-next").ok().flatten() {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.testimonials.rotator.next();
                a.testimonials.show();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.query_selector(".testimonial-prev").ok().flatten() {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.testimonials.rotator.previous();
                a.testimonials.show();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let dots = app.borrow().testimonials.dots.clone();
        for (index, dot) in dots.iter().enumerate() {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.testimonials.rotator.show(index);
                a.testimonials.show();
            });
            let _ = dot.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            // Clamp long gaps (background tabs) so transitions finish instead of jumping
            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0).min(0.1) as f32
            } else {
                0.0
            };
            a.last_time = time;

            a.showcase.tick(dt);
            a.flush();

            if a.testimonials.rotator.tick(dt).is_some() {
                a.testimonials.show();
            }
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use product_showcase::renderer::HeadlessRenderer;
    use product_showcase::{Catalog, Settings, Showcase, ShowcaseEvent};

    env_logger::init();
    log::info!("Product Showcase (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to run in the browser");

    let settings = Settings::load();
    let mut showcase = match Showcase::new(Catalog::builtin(), settings, HeadlessRenderer::new()) {
        Ok(showcase) => showcase,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    println!("\nWalking the carousel...");
    for _ in 0..3 {
        showcase.next();
        showcase.tick(1.0);
    }
    showcase.previous();
    showcase.toggle_wishlist();
    showcase.toggle_preview();
    showcase.tick(1.0);

    for event in showcase.drain_events() {
        match event {
            ShowcaseEvent::ProductChanged(view) => println!(
                "  {} [{}] ${:.0} {} ({})",
                view.name,
                view.progress.label(),
                view.price,
                view.rating_label,
                view.badge.as_deref().unwrap_or("-")
            ),
            ShowcaseEvent::WishlistChanged { count, .. } => println!("  wishlist: {} item(s)", count),
            ShowcaseEvent::PreviewPhaseChanged(phase) => println!("  preview: {}", phase.as_str()),
            _ => {}
        }
    }

    let carousel = showcase.carousel();
    println!(
        "\n✓ {} live slides, {} created / {} destroyed",
        carousel.renderer().live(),
        carousel.renderer().created,
        carousel.renderer().destroyed
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
