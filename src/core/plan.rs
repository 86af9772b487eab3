// iconsmith - core/plan.rs
//
// The ordered list of icons to produce. File names and dimensions are a
// pure function of the configured size tables, so two runs with the same
// tables always target the same files.

use crate::util::constants;

/// Category of a generated icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// `icon-{size}.png`
    Standard,
    /// `icon-maskable-{size}.png`
    Maskable,
    /// `apple-touch-icon.png`
    AppleTouch,
    /// `favicon-{size}x{size}.png`
    Favicon,
}

impl IconKind {
    /// Short label used in log fields.
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Maskable => "maskable",
            Self::AppleTouch => "apple-touch",
            Self::Favicon => "favicon",
        }
    }
}

/// One output file: where it goes and how large it is.
#[derive(Debug, Clone, PartialEq)]
pub struct IconTarget {
    pub kind: IconKind,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    /// Safe-area inset per side, as a fraction of the edge length.
    pub padding: f32,
}

impl IconTarget {
    fn square(kind: IconKind, file_name: String, size: u32, padding: f32) -> Self {
        Self {
            kind,
            file_name,
            width: size,
            height: size,
            padding,
        }
    }
}

/// The configurable size tables a plan is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSet {
    pub sizes: Vec<u32>,
    pub maskable_sizes: Vec<u32>,
    pub maskable_padding: f32,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            sizes: constants::STANDARD_SIZES.to_vec(),
            maskable_sizes: constants::MASKABLE_SIZES.to_vec(),
            maskable_padding: constants::DEFAULT_MASKABLE_PADDING,
        }
    }
}

/// Ordered set of icons for one run.
///
/// Order: standard sizes, maskable sizes, Apple touch icon, favicons
/// (32 then 16).
#[derive(Debug, Clone, PartialEq)]
pub struct IconPlan {
    targets: Vec<IconTarget>,
}

impl IconPlan {
    /// Build the plan for a given icon set.
    pub fn from_set(set: &IconSet) -> Self {
        let mut targets = Vec::with_capacity(
            set.sizes.len() + set.maskable_sizes.len() + 1 + constants::FAVICON_SIZES.len(),
        );

        for &size in &set.sizes {
            targets.push(IconTarget::square(
                IconKind::Standard,
                format!("icon-{size}.png"),
                size,
                0.0,
            ));
        }

        for &size in &set.maskable_sizes {
            targets.push(IconTarget::square(
                IconKind::Maskable,
                format!("icon-maskable-{size}.png"),
                size,
                set.maskable_padding,
            ));
        }

        targets.push(IconTarget::square(
            IconKind::AppleTouch,
            constants::APPLE_TOUCH_FILE_NAME.to_string(),
            constants::APPLE_TOUCH_SIZE,
            0.0,
        ));

        for &size in constants::FAVICON_SIZES {
            targets.push(IconTarget::square(
                IconKind::Favicon,
                format!("favicon-{size}x{size}.png"),
                size,
                0.0,
            ));
        }

        Self { targets }
    }

    /// Plan for the built-in size tables.
    pub fn standard() -> Self {
        Self::from_set(&IconSet::default())
    }

    pub fn targets(&self) -> &[IconTarget] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Output file names in generation order.
    pub fn file_names(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.file_name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_plan_has_fifteen_targets() {
        let plan = IconPlan::standard();
        assert_eq!(plan.len(), 15);

        let count = |kind| plan.targets().iter().filter(|t| t.kind == kind).count();
        assert_eq!(count(IconKind::Standard), 10);
        assert_eq!(count(IconKind::Maskable), 2);
        assert_eq!(count(IconKind::AppleTouch), 1);
        assert_eq!(count(IconKind::Favicon), 2);
    }

    #[test]
    fn test_standard_plan_order_and_names() {
        let plan = IconPlan::standard();
        assert_eq!(
            plan.file_names(),
            vec![
                "icon-72.png",
                "icon-96.png",
                "icon-128.png",
                "icon-144.png",
                "icon-152.png",
                "icon-167.png",
                "icon-180.png",
                "icon-192.png",
                "icon-384.png",
                "icon-512.png",
                "icon-maskable-192.png",
                "icon-maskable-512.png",
                "apple-touch-icon.png",
                "favicon-32x32.png",
                "favicon-16x16.png",
            ]
        );
    }

    #[test]
    fn test_targets_are_square_and_sized_by_name() {
        for target in IconPlan::standard().targets() {
            assert_eq!(target.width, target.height, "{}", target.file_name);
            match target.kind {
                IconKind::AppleTouch => assert_eq!(target.width, 180),
                _ => assert!(
                    target.file_name.contains(&target.width.to_string()),
                    "{} should embed its size",
                    target.file_name
                ),
            }
        }
    }

    #[test]
    fn test_padding_only_applies_to_maskable() {
        let set = IconSet {
            maskable_padding: 0.1,
            ..IconSet::default()
        };
        for target in IconPlan::from_set(&set).targets() {
            let expected = if target.kind == IconKind::Maskable { 0.1 } else { 0.0 };
            assert_eq!(target.padding, expected, "{}", target.file_name);
        }
    }

    #[test]
    fn test_custom_set_keeps_fixed_tail() {
        let set = IconSet {
            sizes: vec![48],
            maskable_sizes: vec![],
            maskable_padding: 0.0,
        };
        let plan = IconPlan::from_set(&set);
        assert_eq!(
            plan.file_names(),
            vec![
                "icon-48.png",
                "apple-touch-icon.png",
                "favicon-32x32.png",
                "favicon-16x16.png"
            ]
        );
    }

    #[test]
    fn test_plan_is_deterministic() {
        assert_eq!(IconPlan::standard(), IconPlan::standard());
    }
}
