use bevy::prelude::*;

use campus::config::MapExtent;
use campus::route::RouteLine;

use crate::map_view::map_to_world;

pub const ROUTE_Z: f32 = 1.0;

const ROUTE_COLOR: Color = Color::srgb(0.86, 0.1, 0.2);

/// Sprite size and world translation for one line.
pub fn line_placement(line: &RouteLine, extent: &MapExtent) -> (Vec2, Vec3) {
    let rect = line.rect(extent);
    let center = map_to_world(rect.center()).extend(ROUTE_Z);
    (rect.size(), center)
}

pub fn attach_route_visuals(
    mut commands: Commands,
    extent: Res<MapExtent>,
    added: Query<(Entity, &RouteLine), Added<RouteLine>>,
) {
    for (entity, line) in &added {
        let (size, center) = line_placement(line, &extent);
        commands.entity(entity).insert((
            Sprite::from_color(ROUTE_COLOR, size),
            Transform::from_translation(center),
        ));
    }
}

pub fn relayout_route_lines(
    extent: Res<MapExtent>,
    mut lines: Query<(&RouteLine, &mut Sprite, &mut Transform)>,
) {
    if !extent.is_changed() {
        return;
    }
    for (line, mut sprite, mut transform) in &mut lines {
        let (size, center) = line_placement(line, &extent);
        sprite.custom_size = Some(size);
        transform.translation = center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus::geometry::CssLength;
    use campus::paths::{Segment, SegmentKind};

    #[test]
    fn test_horizontal_line_centered_below_origin() {
        let line = RouteLine {
            index: 0,
            segment: Segment {
                kind: SegmentKind::Horizontal,
                top: CssLength::Percent(50.0),
                left: CssLength::Pixels(100.0),
                length: CssLength::Pixels(200.0),
            },
        };
        let extent = MapExtent {
            width: 1000.0,
            height: 400.0,
        };
        let (size, center) = line_placement(&line, &extent);
        assert_eq!(size.x, 200.0);
        assert_eq!(center.x, 200.0);
        assert!(center.y < -190.0 && center.y > -210.0);
        assert_eq!(center.z, ROUTE_Z);
    }
}
