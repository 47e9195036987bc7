// SPDX-License-Identifier: MPL-2.0
//! Animated targets and their numeric properties.

/// Identifies one animated element.
///
/// Components own a fixed set of names (`"drawer.panel"`, ...). Repeated
/// elements such as menu entries share a name and differ by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    name: &'static str,
    index: usize,
}

impl Target {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name, index: 0 }
    }

    /// The `index`-th element of a repeated group.
    #[must_use]
    pub const fn nth(name: &'static str, index: usize) -> Self {
        Self { name, index }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Targets `0..count` of a repeated group, in order.
    #[must_use]
    pub fn group(name: &'static str, count: usize) -> Vec<Target> {
        (0..count).map(|index| Target::nth(name, index)).collect()
    }
}

/// Numeric property of a target.
///
/// Units are up to the renderer: `X`/`Y` are pixels except where a component
/// documents a fraction (the drawer panel uses a fraction of its width).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    X,
    Y,
    Opacity,
    Scale,
    /// Degrees.
    Rotation,
}

impl Property {
    /// Value assumed for a property that was never written.
    #[must_use]
    pub fn default_value(self) -> f32 {
        match self {
            Property::Opacity | Property::Scale => 1.0,
            Property::X | Property::Y | Property::Rotation => 0.0,
        }
    }
}

/// A set of property values, applied together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(Vec<(Property, f32)>);

impl Props {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing an earlier value for the same property.
    #[must_use]
    pub fn with(mut self, property: Property, value: f32) -> Self {
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.0.push((property, value)),
        }
        self
    }

    #[must_use]
    pub fn x(self, value: f32) -> Self {
        self.with(Property::X, value)
    }

    #[must_use]
    pub fn y(self, value: f32) -> Self {
        self.with(Property::Y, value)
    }

    #[must_use]
    pub fn opacity(self, value: f32) -> Self {
        self.with(Property::Opacity, value)
    }

    #[must_use]
    pub fn scale(self, value: f32) -> Self {
        self.with(Property::Scale, value)
    }

    #[must_use]
    pub fn rotation(self, value: f32) -> Self {
        self.with(Property::Rotation, value)
    }

    #[must_use]
    pub fn get(&self, property: Property) -> Option<f32> {
        self.0
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, f32)> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
