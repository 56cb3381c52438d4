use crate::{
    config::EditorConfig,
    export::url::{ExportOutcome, apply_filters},
    filters::model::{FilterId, FilterValues, REGISTRY, ToolRange},
    foundation::error::{ArclightError, ArclightResult},
    interaction::{
        carousel::{CarouselEvent, CarouselState},
        slider::{SliderEvent, SliderState},
    },
    preview::compositor::{PreviewPlan, compose},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Serializable editor input, used to replay recorded sessions.
pub enum EditorEvent {
    OpenMenu,
    DismissMenu,
    LoadImage,
    ResetAll,
    ResetSelected,
    SliderLayout { track_width: f64 },
    SliderGrant,
    SliderMove { dx: f64 },
    SliderRelease,
    CarouselGrant,
    CarouselMove { dx: f64 },
    CarouselRelease { dx: f64, vx: f64 },
    CarouselTick { dt_secs: f64 },
    SelectTool { index: usize },
}

impl EditorEvent {
    /// Reject events carrying NaN/infinite numbers.
    pub fn validate(&self) -> ArclightResult<()> {
        let numbers = match *self {
            Self::SliderLayout { track_width } => vec![track_width],
            Self::SliderMove { dx } | Self::CarouselMove { dx } => vec![dx],
            Self::CarouselRelease { dx, vx } => vec![dx, vx],
            Self::CarouselTick { dt_secs } => vec![dt_secs],
            _ => Vec::new(),
        };
        if numbers.iter().all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(ArclightError::gesture(format!(
                "{self:?} carries a non-finite number"
            )))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// What changed as a result of one event.
pub struct EditorUpdate {
    /// Filter values changed; the preview should be recomposed.
    pub values_changed: bool,
    /// A different tool is now selected.
    pub tool_changed: bool,
}

/// The filter menu: owns the filter values and both gesture state machines.
///
/// All mutation flows through the methods below; nothing is shared.
#[derive(Clone, Debug)]
pub struct FilterEditor {
    config: EditorConfig,
    values: FilterValues,
    slider: SliderState,
    carousel: CarouselState,
    menu_open: bool,
}

impl FilterEditor {
    pub fn new(config: EditorConfig) -> ArclightResult<Self> {
        config.validate()?;
        let carousel = CarouselState::new(REGISTRY.len(), config.carousel.clone())?;
        let slider = SliderState::for_tool(REGISTRY[0], 0, 0.0, config.dead_zone);
        Ok(Self {
            config,
            values: FilterValues::default(),
            slider,
            carousel,
            menu_open: false,
        })
    }

    pub fn values(&self) -> &FilterValues {
        &self.values
    }

    pub fn slider(&self) -> &SliderState {
        &self.slider
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn selected_tool(&self) -> &'static ToolRange {
        &REGISTRY[self.carousel.index()]
    }

    pub fn selected_filter(&self) -> FilterId {
        self.selected_tool().id
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    /// Close the menu. In-flight gestures are dropped; whatever value was last
    /// propagated stays committed.
    pub fn dismiss_menu(&mut self) {
        self.slider.apply(SliderEvent::Cancel);
        self.carousel.apply(CarouselEvent::Cancel);
        self.menu_open = false;
    }

    /// A new image replaced the active one (upload, AI result, ...).
    pub fn load_image(&mut self) -> EditorUpdate {
        tracing::debug!("image replaced; filters reset");
        self.reset_all()
    }

    pub fn reset_all(&mut self) -> EditorUpdate {
        let changed = !self.values.is_default();
        self.values.reset_all();
        self.slider.set_value(0);
        EditorUpdate {
            values_changed: changed,
            tool_changed: false,
        }
    }

    pub fn reset_selected(&mut self) -> EditorUpdate {
        let id = self.selected_filter();
        let changed = self.values.get(id) != 0;
        self.values.reset(id);
        self.slider.set_value(0);
        EditorUpdate {
            values_changed: changed,
            tool_changed: false,
        }
    }

    /// Feed a slider event. Moves write straight into the filter values.
    pub fn slider_event(&mut self, event: SliderEvent) -> EditorUpdate {
        if !self.menu_open {
            return EditorUpdate::default();
        }
        match self.slider.apply(event) {
            Some(v) => {
                self.values.set(self.selected_filter(), v);
                EditorUpdate {
                    values_changed: true,
                    tool_changed: false,
                }
            }
            None => EditorUpdate::default(),
        }
    }

    /// Feed a carousel event. A selection change reloads the slider from the
    /// newly selected tool's stored value and range.
    pub fn carousel_event(&mut self, event: CarouselEvent) -> EditorUpdate {
        if !self.menu_open && !matches!(event, CarouselEvent::Tick { .. }) {
            return EditorUpdate::default();
        }
        let Some(index) = self.carousel.apply(event) else {
            return EditorUpdate::default();
        };
        let tool = REGISTRY[index];
        let width = self.slider.track_width();
        self.slider = SliderState::for_tool(
            tool,
            self.values.get(tool.id),
            width,
            self.config.dead_zone,
        );
        tracing::debug!(tool = %tool.id, value = self.slider.value(), "tool switched");
        EditorUpdate {
            values_changed: false,
            tool_changed: true,
        }
    }

    /// Dispatch a recorded event.
    pub fn handle(&mut self, event: EditorEvent) -> ArclightResult<EditorUpdate> {
        event.validate()?;
        Ok(match event {
            EditorEvent::OpenMenu => {
                self.open_menu();
                EditorUpdate::default()
            }
            EditorEvent::DismissMenu => {
                self.dismiss_menu();
                EditorUpdate::default()
            }
            EditorEvent::LoadImage => self.load_image(),
            EditorEvent::ResetAll => self.reset_all(),
            EditorEvent::ResetSelected => self.reset_selected(),
            EditorEvent::SliderLayout { track_width } => {
                self.slider_event(SliderEvent::Layout { track_width })
            }
            EditorEvent::SliderGrant => self.slider_event(SliderEvent::Grant),
            EditorEvent::SliderMove { dx } => self.slider_event(SliderEvent::Move { dx }),
            EditorEvent::SliderRelease => self.slider_event(SliderEvent::Release),
            EditorEvent::CarouselGrant => self.carousel_event(CarouselEvent::Grant),
            EditorEvent::CarouselMove { dx } => self.carousel_event(CarouselEvent::Move { dx }),
            EditorEvent::CarouselRelease { dx, vx } => {
                self.carousel_event(CarouselEvent::Release { dx, vx })
            }
            EditorEvent::CarouselTick { dt_secs } => {
                self.carousel_event(CarouselEvent::Tick { dt_secs })
            }
            EditorEvent::SelectTool { index } => {
                self.carousel_event(CarouselEvent::Select { index })
            }
        })
    }

    pub fn preview(&self) -> PreviewPlan {
        compose(&self.values)
    }

    pub fn export(&self, url: &str) -> ExportOutcome {
        apply_filters(url, &self.values)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/controller.rs"]
mod tests;
