//! The rendering engine: turns a content document into page content through
//! a [`Gateway`], then hands the interactive parts to the runtime.

use tracing::{debug, info, warn};

use crate::content::{ContentDocument, LayoutKind, TopicItem};
use crate::dom::{Gateway, Slot};
use crate::rendering::{
    heading, render_navigation, render_sidebar, render_unknown, render_variant, Context, Ids,
    Registry, Resolved,
};
use crate::runtime::{Action, Outcome, Runtime};

mod config;

pub use config::{Configuration, Features, Hooks, RenderHook, RenderedHook, Settings, TopicHook};

/// Class added to the page container when the sidebar layout is in use.
pub const LAYOUT_SIDEBAR: &str = "layout-sidebar";

/// One engine per page. The document it renders is replaced wholesale by
/// each call to [`init()`](Engine::init); the configuration never changes.
pub struct Engine<G> {
    settings: Settings,
    registry: Registry,
    hooks: Hooks<G>,
    ids: Ids,
    document: ContentDocument,
    gateway: G,
    runtime: Runtime,
}

impl<G: Gateway> Engine<G> {
    pub fn new(configuration: Configuration<G>, gateway: G) -> Self {
        let Configuration {
            settings,
            registry,
            hooks,
        } = configuration;
        let trusted = settings
            .features
            .trusted_examples;
        if trusted {
            info!("Sidebar examples will run in the host page");
        }

        Engine {
            settings,
            registry,
            hooks,
            ids: Ids::random(),
            document: ContentDocument::default(),
            gateway,
            runtime: Runtime::new(trusted),
        }
    }

    /// Replace the source of generated ids, for example with sequential
    /// ones so output is reproducible.
    pub fn with_ids(mut self, ids: Ids) -> Self {
        self.ids = ids;
        self
    }

    /// Take a new document and render it, replacing whatever was rendered
    /// before.
    pub fn init(&mut self, document: ContentDocument) {
        self.document = document;

        if let Some(hook) = &self
            .hooks
            .before_render
        {
            hook(self, &self.document);
        }

        self.render();

        if let Some(hook) = &self
            .hooks
            .after_render
        {
            hook(self, &self.document);
        }
    }

    /// Render the current document onto the page. Parts of the page the
    /// gateway doesn't provide are skipped.
    pub fn render(&mut self) {
        let features = self
            .settings
            .features;
        let context = Context::new(&features, &self.ids);

        let title = self
            .document
            .section
            .as_ref()
            .map(heading);

        let content: String = self
            .document
            .topics
            .iter()
            .map(|topic| self.render_topic(&context, topic))
            .collect();

        let layout = self
            .document
            .layout();
        let sidebar = match layout {
            LayoutKind::Sidebar => {
                let sticky = self
                    .document
                    .section
                    .as_ref()
                    .map(|section| {
                        section
                            .layout
                            .sidebar_sticky
                    })
                    .unwrap_or(false);
                self.document
                    .sidebar
                    .as_ref()
                    .map(|sidebar| render_sidebar(&context, sidebar, sticky))
            }
            LayoutKind::Standard => None,
        };

        let navigation = self
            .document
            .navigation
            .as_ref()
            .map(render_navigation)
            .unwrap_or_default();

        let widgets = context.into_widgets();

        // now onto the page

        match title {
            Some(title) => {
                if !self
                    .gateway
                    .set_text(Slot::Title, &title)
                {
                    debug!("No title on page, skipping");
                }
            }
            None => debug!("Document has no section, leaving title alone"),
        }

        if !self
            .gateway
            .set_html(Slot::Content, &content)
        {
            debug!("No content container on page, skipping topics");
        }

        let sidebar_layout = layout == LayoutKind::Sidebar;
        if !self
            .gateway
            .set_slot_class(Slot::Container, LAYOUT_SIDEBAR, sidebar_layout)
        {
            debug!("No container on page, skipping layout");
        }
        match sidebar {
            Some((class, html)) => {
                if !self
                    .gateway
                    .attach_sidebar(&class, &html)
                {
                    debug!("No container on page, skipping sidebar");
                }
            }
            None => self
                .gateway
                .detach_sidebar(),
        }

        if !self
            .gateway
            .set_html(Slot::Navigation, &navigation)
        {
            debug!("No navigation on page, skipping");
        }

        self.runtime
            .attach(widgets, &mut self.gateway);

        info!(
            "Rendered {} topics",
            self.document
                .topics
                .len()
        );
    }

    /// Render a single topic to markup, running the topic hooks either side.
    /// A type with no renderer gets a placeholder block rather than an
    /// error.
    pub fn render_topic(&self, context: &Context, topic: &TopicItem) -> String {
        if let Some(hook) = &self
            .hooks
            .before_topic_render
        {
            hook(self, topic);
        }

        let html = match self
            .registry
            .resolve(&topic.kind)
        {
            Some(Resolved::Custom(handler)) => handler(context, topic),
            Some(Resolved::Builtin(variant)) => render_variant(context, variant, topic),
            None => {
                warn!("No renderer for type '{}'", topic.kind);
                render_unknown(topic)
            }
        };

        if let Some(hook) = &self
            .hooks
            .after_topic_render
        {
            hook(self, topic, &html);
        }

        html
    }

    /// Respond to something the user did on the rendered page.
    pub fn dispatch(&mut self, action: &Action) -> Outcome {
        self.runtime
            .dispatch(action, &mut self.gateway)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    pub fn into_gateway(self) -> G {
        self.gateway
    }
}
