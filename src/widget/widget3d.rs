use std::ops::Deref;

use crate::color::Color;
use crate::errors::{Result, VizError, precondition};
use crate::math::Affine3f;
use crate::native::{Capabilities, Prop, Prop3D, SurfaceActor};
use crate::settings::SurfaceStyle;

use super::{MatrixConverter, Widget, WidgetAccessor, capability_mismatch};

/// Widget whose prop can be placed in 3D.
///
/// Every operation re-checks the prop's capability; calling one on the wrong
/// kind of prop panics. The `try_` variants report the same conditions as
/// [`VizError`] instead.
#[derive(Debug, Clone, Default)]
pub struct Widget3D {
    widget: Widget,
}

impl Widget3D {
    /// Creates an empty view with no prop attached.
    #[must_use]
    pub fn new() -> Self {
        Self { widget: Widget::new() }
    }

    /// Checked downcast. The returned view has its own allocation (count 1)
    /// that references the same prop as `widget`.
    #[track_caller]
    #[must_use]
    pub fn from_widget(widget: &Widget) -> Self {
        precondition(Self::try_from_widget(widget))
    }

    pub fn try_from_widget(widget: &Widget) -> Result<Self> {
        let prop = widget.require_prop()?;
        if prop.as_prop3d().is_none() {
            return Err(capability_mismatch(&prop, Capabilities::PLACEMENT_3D));
        }

        let view = Self::new();
        log::debug!("widget #{} viewed as Widget3D #{}", widget.id(), view.id());
        WidgetAccessor::set_prop(&view.widget, prop);
        Ok(view)
    }

    fn with_prop3d<R>(&self, f: impl FnOnce(&dyn Prop3D) -> R) -> Result<R> {
        let prop = self.widget.require_prop()?;
        let actor = prop
            .as_prop3d()
            .ok_or_else(|| capability_mismatch(&prop, Capabilities::PLACEMENT_3D))?;
        Ok(f(actor))
    }

    fn with_surface<R>(&self, f: impl FnOnce(&dyn SurfaceActor) -> R) -> Result<R> {
        let prop = self.widget.require_prop()?;
        let actor = prop
            .as_actor()
            .ok_or_else(|| capability_mismatch(&prop, Capabilities::SURFACE))?;
        Ok(f(actor))
    }

    // -- Pose --

    /// Installs `pose` as the prop's user matrix.
    #[track_caller]
    pub fn set_pose(&self, pose: &Affine3f) {
        precondition(self.try_set_pose(pose));
    }

    pub fn try_set_pose(&self, pose: &Affine3f) -> Result<()> {
        self.with_prop3d(|actor| {
            actor.set_user_matrix(Some(MatrixConverter::to_native(&pose.matrix)));
            actor.modified();
        })
    }

    /// Composes `delta` in world space: the new pose is `delta * current`.
    /// Without a current pose this is the same as [`set_pose`](Self::set_pose).
    #[track_caller]
    pub fn update_pose(&self, delta: &Affine3f) {
        precondition(self.try_update_pose(delta));
    }

    pub fn try_update_pose(&self, delta: &Affine3f) -> Result<()> {
        self.with_prop3d(|actor| {
            let updated = match actor.user_matrix() {
                Some(current) => *delta * Affine3f::new(MatrixConverter::to_matx(&current)),
                None => *delta,
            };
            actor.set_user_matrix(Some(MatrixConverter::to_native(&updated.matrix)));
            actor.modified();
        })
    }

    /// Current pose. Panics if no pose was ever installed.
    #[track_caller]
    #[must_use]
    pub fn pose(&self) -> Affine3f {
        precondition(self.try_pose())
    }

    pub fn try_pose(&self) -> Result<Affine3f> {
        self.with_prop3d(|actor| actor.user_matrix())?
            .map(|m| Affine3f::new(MatrixConverter::to_matx(&m)))
            .ok_or(VizError::PoseNotSet)
    }

    /// Current pose, or identity when none was installed yet.
    #[track_caller]
    #[must_use]
    pub fn pose_or_identity(&self) -> Affine3f {
        match self.try_pose() {
            Err(VizError::PoseNotSet) => Affine3f::IDENTITY,
            other => precondition(other),
        }
    }

    /// Removes the installed pose.
    #[track_caller]
    pub fn reset_pose(&self) {
        precondition(self.try_reset_pose());
    }

    pub fn try_reset_pose(&self) -> Result<()> {
        self.with_prop3d(|actor| {
            actor.set_user_matrix(None);
            actor.modified();
        })
    }

    // -- Color --

    /// Paints the whole surface with `color` using the default flat, unlit
    /// style. Requires a prop with a surface property.
    #[track_caller]
    pub fn set_color(&self, color: Color) {
        precondition(self.try_set_color(color));
    }

    pub fn try_set_color(&self, color: Color) -> Result<()> {
        self.try_set_color_with_style(color, &SurfaceStyle::default())
    }

    #[track_caller]
    pub fn set_color_with_style(&self, color: Color, style: &SurfaceStyle) {
        precondition(self.try_set_color_with_style(color, style));
    }

    pub fn try_set_color_with_style(&self, color: Color, style: &SurfaceStyle) -> Result<()> {
        let rgb = color.to_rgb();
        self.with_surface(|actor| {
            actor.mapper().write().scalar_visibility = style.scalar_visibility;
            {
                let mut property = actor.property().write();
                property.color = rgb;
                property.edge_color = rgb;
                property.ambient = style.ambient;
                property.diffuse = style.diffuse;
                property.specular = style.specular;
                property.lighting = style.lighting;
            }
            actor.modified();
        })
    }
}

impl Deref for Widget3D {
    type Target = Widget;

    fn deref(&self) -> &Widget {
        &self.widget
    }
}

impl From<Widget3D> for Widget {
    fn from(view: Widget3D) -> Self {
        view.widget
    }
}

impl TryFrom<&Widget> for Widget3D {
    type Error = VizError;

    fn try_from(widget: &Widget) -> Result<Self> {
        Self::try_from_widget(widget)
    }
}

impl Widget {
    /// Checked downcast to a [`Widget3D`]. Panics if the prop is not placeable.
    #[track_caller]
    #[must_use]
    pub fn as_widget3d(&self) -> Widget3D {
        Widget3D::from_widget(self)
    }

    pub fn try_as_widget3d(&self) -> Result<Widget3D> {
        Widget3D::try_from_widget(self)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::{Mat3, Vec3};

    use super::*;
    use crate::native::{Actor, Actor2D, Assembly, PropRef};

    fn attached(prop: PropRef) -> Widget {
        let widget = Widget::new();
        WidgetAccessor::set_prop(&widget, prop);
        widget
    }

    fn pose_a() -> Affine3f {
        Affine3f::from_rvec_translation(Vec3::new(0.1, 0.2, 0.3), Vec3::new(1.0, 2.0, 3.0))
    }

    fn pose_b() -> Affine3f {
        Affine3f::from_rotation_translation(Mat3::from_rotation_z(0.5), Vec3::new(-4.0, 0.5, 2.0))
    }

    // ========================================================================
    // Downcast
    // ========================================================================

    #[test]
    fn test_downcast_has_independent_count() {
        let actor = Actor::shared();
        let widget = attached(actor.clone());
        let view = widget.as_widget3d();

        assert!(!view.shares_impl(&widget));
        assert!(view.shares_prop(&widget));
        assert_eq!(widget.ref_count(), 1);
        assert_eq!(view.ref_count(), 1);
        assert_eq!(Arc::strong_count(&actor), 3);

        drop(view);
        assert!(widget.has_prop());
        assert_eq!(Arc::strong_count(&actor), 2);
    }

    #[test]
    fn test_downcast_accepts_assembly() {
        let widget = attached(Assembly::shared());
        assert!(Widget3D::try_from(&widget).is_ok());
    }

    #[test]
    #[should_panic(expected = "PLACEMENT_3D")]
    fn test_downcast_overlay_is_fatal() {
        let widget = attached(Actor2D::shared());
        let _ = widget.as_widget3d();
    }

    #[test]
    fn test_try_downcast_reports_mismatch() {
        let widget = attached(Actor2D::shared());
        let err = widget.try_as_widget3d().unwrap_err();
        assert!(matches!(
            err,
            VizError::CapabilityMismatch { required, class }
                if required == Capabilities::PLACEMENT_3D && class == "Actor2D"
        ));
        assert!(matches!(Widget::new().try_as_widget3d(), Err(VizError::NoProp)));
    }

    #[test]
    fn test_upcast_shares_view_allocation() {
        let view = attached(Actor::shared()).as_widget3d();
        let copy = view.clone();
        let widget: Widget = view.into();
        assert!(widget.shares_impl(&copy));
        assert_eq!(widget.ref_count(), 2);
    }

    // ========================================================================
    // Pose
    // ========================================================================

    #[test]
    fn test_set_pose_round_trip() {
        let view = attached(Actor::shared()).as_widget3d();
        view.set_pose(&pose_a());
        assert_eq!(view.pose(), pose_a());
    }

    #[test]
    fn test_set_pose_visible_through_original_widget() {
        let widget = attached(Actor::shared());
        widget.as_widget3d().set_pose(&pose_a());
        assert_eq!(widget.as_widget3d().pose(), pose_a());
    }

    #[test]
    fn test_set_pose_marks_modified() {
        let actor = Actor::shared();
        let view = attached(actor.clone()).as_widget3d();
        let before = actor.modified_time();
        view.set_pose(&pose_a());
        assert!(actor.modified_time() > before);
    }

    #[test]
    fn test_update_pose_composes_on_the_left() {
        let view = attached(Actor::shared()).as_widget3d();
        let current = pose_a();
        let delta = pose_b();

        view.set_pose(&current);
        view.update_pose(&delta);

        assert_eq!(view.pose(), delta * current);
        assert_ne!(view.pose(), current * delta);
    }

    #[test]
    fn test_first_update_equals_set() {
        let updated = attached(Actor::shared()).as_widget3d();
        let set = attached(Actor::shared()).as_widget3d();

        updated.update_pose(&pose_b());
        set.set_pose(&pose_b());
        assert_eq!(updated.pose(), set.pose());
    }

    #[test]
    fn test_repeated_updates_accumulate() {
        let view = attached(Actor::shared()).as_widget3d();
        let step = Affine3f::from_translation(Vec3::new(1.0, 0.0, 0.0));
        for _ in 0..3 {
            view.update_pose(&step);
        }
        assert_eq!(view.pose().translation(), Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "no pose has been installed")]
    fn test_pose_without_transform_is_fatal() {
        let view = attached(Actor::shared()).as_widget3d();
        let _ = view.pose();
    }

    #[test]
    fn test_pose_relaxed_accessors() {
        let view = attached(Actor::shared()).as_widget3d();
        assert!(matches!(view.try_pose(), Err(VizError::PoseNotSet)));
        assert_eq!(view.pose_or_identity(), Affine3f::IDENTITY);

        view.set_pose(&pose_a());
        view.reset_pose();
        assert!(matches!(view.try_pose(), Err(VizError::PoseNotSet)));
    }

    #[test]
    #[should_panic(expected = "PLACEMENT_3D")]
    fn test_set_pose_after_prop_swap_is_fatal() {
        let widget = attached(Actor::shared());
        let view = widget.as_widget3d();
        WidgetAccessor::set_prop(&view, Actor2D::shared());
        view.set_pose(&pose_a());
    }

    #[test]
    #[should_panic(expected = "no native prop")]
    fn test_empty_view_is_fatal() {
        Widget3D::new().set_pose(&Affine3f::IDENTITY);
    }

    // ========================================================================
    // Color
    // ========================================================================

    #[test]
    fn test_set_color_side_effects() {
        let actor = Actor::shared();
        let view = attached(actor.clone()).as_widget3d();
        let before = actor.modified_time();

        view.set_color(Color::RED);

        let property = actor.property().read().clone();
        assert_eq!(property.color, [1.0, 0.0, 0.0]);
        assert_eq!(property.edge_color, [1.0, 0.0, 0.0]);
        assert_eq!(property.ambient, 0.8);
        assert_eq!(property.diffuse, 0.8);
        assert_eq!(property.specular, 0.8);
        assert!(!property.lighting);
        assert!(!actor.mapper().read().scalar_visibility);
        assert!(actor.modified_time() > before);
    }

    #[test]
    fn test_set_color_with_custom_style() {
        let actor = Actor::shared();
        let view = attached(actor.clone()).as_widget3d();
        let style = SurfaceStyle {
            ambient: 0.1,
            lighting: true,
            ..SurfaceStyle::default()
        };

        view.set_color_with_style(Color::GREEN, &style);

        let property = actor.property().read().clone();
        assert_eq!(property.color, [0.0, 1.0, 0.0]);
        assert_eq!(property.ambient, 0.1);
        assert_eq!(property.diffuse, 0.8);
        assert!(property.lighting);
    }

    #[test]
    #[should_panic(expected = "SURFACE")]
    fn test_set_color_on_assembly_is_fatal() {
        let view = attached(Assembly::shared()).as_widget3d();
        view.set_color(Color::RED);
    }

    #[test]
    fn test_try_set_color_on_assembly_reports_mismatch() {
        let view = attached(Assembly::shared()).as_widget3d();
        assert!(matches!(
            view.try_set_color(Color::RED),
            Err(VizError::CapabilityMismatch { required, .. }) if required == Capabilities::SURFACE
        ));
    }
}
