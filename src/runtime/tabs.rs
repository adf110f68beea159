//! Exclusive selection widgets (tab groups and component code tabs) and the
//! visual demo controls.

use super::Outcome;
use crate::dom::{CodePanel, Gateway, Target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    id: String,
    count: usize,
    active: usize,
}

impl TabGroup {
    /// A group of `count` tabs, the first of which is rendered active.
    pub fn new(id: String, count: usize) -> Self {
        TabGroup {
            id,
            count,
            active: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn select(&mut self, index: usize, gateway: &mut dyn Gateway) -> Outcome {
        if index >= self.count {
            return Outcome::Ignored;
        }
        for i in 0..self.count {
            let header = Target::TabHeader {
                group: self
                    .id
                    .clone(),
                index: i,
            };
            let panel = Target::TabPanel {
                group: self
                    .id
                    .clone(),
                index: i,
            };
            if i == index {
                gateway.add_class(&header, "active");
                gateway.add_class(&panel, "active");
            } else {
                gateway.remove_class(&header, "active");
                gateway.remove_class(&panel, "active");
            }
        }
        self.active = index;
        Outcome::Handled
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTabs {
    id: String,
    panels: Vec<CodePanel>,
    active: Option<CodePanel>,
}

impl CodeTabs {
    /// `panels` lists those actually rendered, in order.
    pub fn new(id: String, panels: Vec<CodePanel>) -> Self {
        let active = panels
            .first()
            .copied();
        CodeTabs { id, panels, active }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn active(&self) -> Option<CodePanel> {
        self.active
    }

    pub fn select(&mut self, panel: CodePanel, gateway: &mut dyn Gateway) -> Outcome {
        if !self
            .panels
            .contains(&panel)
        {
            return Outcome::Ignored;
        }
        for other in &self.panels {
            let tab = Target::CodeTab {
                demo: self
                    .id
                    .clone(),
                panel: *other,
            };
            let code = Target::CodePanel {
                demo: self
                    .id
                    .clone(),
                panel: *other,
            };
            if *other == panel {
                gateway.add_class(&tab, "active");
                gateway.add_class(&code, "active");
            } else {
                gateway.remove_class(&tab, "active");
                gateway.remove_class(&code, "active");
            }
        }
        self.active = Some(panel);
        Outcome::Handled
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoControl {
    pub property: String,
    pub unit: String,
}

/// A visual demo's controls and the preview element they style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoWidget {
    id: String,
    controls: Vec<DemoControl>,
}

impl DemoWidget {
    pub fn new(id: String, controls: Vec<DemoControl>) -> Self {
        DemoWidget { id, controls }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Reflect a control's new value in its label and on the preview.
    pub fn adjust(&self, property: &str, value: &str, gateway: &mut dyn Gateway) -> Outcome {
        let control = match self
            .controls
            .iter()
            .find(|control| control.property == property)
        {
            Some(control) => control,
            None => return Outcome::Ignored,
        };

        let value = format!("{}{}", value, control.unit);
        gateway.set_text_content(
            &Target::ControlValue {
                demo: self
                    .id
                    .clone(),
                property: property.to_string(),
            },
            &value,
        );
        gateway.set_style(
            &Target::DemoPreview {
                demo: self
                    .id
                    .clone(),
            },
            property,
            &value,
        );
        Outcome::Handled
    }
}
