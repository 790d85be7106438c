use serde::{Deserialize, Serialize};

use crate::error::SchedulerResult;
use crate::render::{GridFrame, Renderer};

use super::SchedulerEngine;

/// Ordered repaint classes, cheapest first.
///
/// `Overlay` redraws transient chrome over an unchanged grid (drag ghost, now
/// marker, toasts), `Layout` re-places cards at the current density, `Full`
/// rebuilds everything including the axis scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    Overlay,
    Layout,
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

/// Domain-oriented invalidation topic used to classify repaint requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    General,
    Layout,
    Zoom,
    Drag,
    NowMarker,
    Feedback,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::General => 1 << 0,
            Self::Layout => 1 << 1,
            Self::Zoom => 1 << 2,
            Self::Drag => 1 << 3,
            Self::NowMarker => 1 << 4,
            Self::Feedback => 1 << 5,
        }
    }
}

/// Bitmask of invalidation topics used for selective redraw decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::General.bit()
        | InvalidationTopic::Layout.bit()
        | InvalidationTopic::Zoom.bit()
        | InvalidationTopic::Drag.bit()
        | InvalidationTopic::NowMarker.bit()
        | InvalidationTopic::Feedback.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        (self.bits & other.bits) != 0
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        self.intersects(Self::from_topic(topic))
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}

/// Coalesced invalidation request consumed by frame scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationMask {
    level: InvalidationLevel,
    #[serde(default)]
    topics: InvalidationTopics,
}

impl InvalidationMask {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            level: InvalidationLevel::None,
            topics: InvalidationTopics::none(),
        }
    }

    #[must_use]
    pub const fn overlay(topic: InvalidationTopic) -> Self {
        Self {
            level: InvalidationLevel::Overlay,
            topics: InvalidationTopics::from_topic(topic),
        }
    }

    #[must_use]
    pub const fn layout() -> Self {
        Self {
            level: InvalidationLevel::Layout,
            topics: InvalidationTopics::from_topic(InvalidationTopic::Layout),
        }
    }

    #[must_use]
    pub const fn full() -> Self {
        Self {
            level: InvalidationLevel::Full,
            topics: InvalidationTopics::all(),
        }
    }

    #[must_use]
    pub const fn with_level_and_topics(
        level: InvalidationLevel,
        topics: InvalidationTopics,
    ) -> Self {
        Self { level, topics }
    }

    #[must_use]
    pub const fn level(self) -> InvalidationLevel {
        self.level
    }

    #[must_use]
    pub const fn topics(self) -> InvalidationTopics {
        self.topics
    }

    #[must_use]
    pub const fn has_topic(self, topic: InvalidationTopic) -> bool {
        self.topics.contains_topic(topic)
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self.level, InvalidationLevel::None)
    }

    pub fn merge(&mut self, other: Self) {
        self.level = self.level.max(other.level);
        self.topics = self.topics.union(other.topics);
    }
}

impl<R: Renderer> SchedulerEngine<R> {
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationMask {
        self.core.runtime.pending_invalidation
    }

    #[must_use]
    pub fn pending_invalidation_level(&self) -> InvalidationLevel {
        self.core.runtime.pending_invalidation.level()
    }

    #[must_use]
    pub fn pending_invalidation_topics(&self) -> InvalidationTopics {
        self.core.runtime.pending_invalidation.topics()
    }

    #[must_use]
    pub fn has_pending_invalidation_topic(&self, topic: InvalidationTopic) -> bool {
        self.core.runtime.pending_invalidation.has_topic(topic)
    }

    #[must_use]
    pub fn has_pending_invalidation(&self) -> bool {
        !self.core.runtime.pending_invalidation.is_none()
    }

    pub fn clear_pending_invalidation(&mut self) {
        self.core.runtime.pending_invalidation = InvalidationMask::none();
    }

    #[must_use]
    pub fn take_pending_invalidation(&mut self) -> InvalidationMask {
        let pending = self.core.runtime.pending_invalidation;
        self.clear_pending_invalidation();
        pending
    }

    /// Builds a frame only when something actually needs repainting.
    pub fn build_frame_if_invalidated(&mut self) -> SchedulerResult<Option<GridFrame>> {
        if !self.has_pending_invalidation() {
            return Ok(None);
        }
        self.build_frame().map(Some)
    }

    /// Renders only when something actually needs repainting; `true` when a
    /// frame went out.
    pub fn render_if_invalidated(&mut self) -> SchedulerResult<bool> {
        if !self.has_pending_invalidation() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    pub(super) fn invalidate_with_detail(
        &mut self,
        level: InvalidationLevel,
        topics: InvalidationTopics,
    ) {
        self.core
            .runtime
            .pending_invalidation
            .merge(InvalidationMask::with_level_and_topics(level, topics));
    }

    pub(super) fn invalidate_full(&mut self) {
        self.invalidate_with_detail(InvalidationLevel::Full, InvalidationTopics::all());
    }

    pub(super) fn invalidate_layout(&mut self) {
        self.invalidate_with_detail(
            InvalidationLevel::Layout,
            InvalidationTopics::from_topic(InvalidationTopic::Layout),
        );
    }

    pub(super) fn invalidate_overlay(&mut self, topic: InvalidationTopic) {
        self.invalidate_with_detail(
            InvalidationLevel::Overlay,
            InvalidationTopics::from_topic(topic),
        );
    }
}
