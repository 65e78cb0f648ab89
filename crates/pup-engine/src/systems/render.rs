use crate::components::layer::RenderLayer;
use crate::components::sprite::ImageHandle;
use crate::components::tilemap::{TileKind, TileMap};
use crate::core::geometry::Rect;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Fill shade of walkable background tiles.
pub const PASSABLE_SHADE: f32 = 0.5;
/// Fill shade of blocking tiles.
pub const BLOCKING_SHADE: f32 = 0.0;

/// Push one solid fill per tile, in map order.
pub fn draw_tilemap(map: &TileMap, buffer: &mut RenderBuffer) {
    for tile in map.tiles() {
        let shade = match tile.kind {
            TileKind::Passable => PASSABLE_SHADE,
            TileKind::Blocking => BLOCKING_SHADE,
        };
        buffer.push(RenderInstance {
            image: RenderInstance::NO_IMAGE,
            shade,
            ..rect_instance(&tile.bounds, RenderLayer::Terrain)
        });
    }
}

/// Push a sprite covering `bounds`.
pub fn draw_sprite(bounds: &Rect, image: ImageHandle, layer: RenderLayer, buffer: &mut RenderBuffer) {
    buffer.push(RenderInstance {
        image: image.id.0 as f32,
        flip: if image.flipped { 1.0 } else { 0.0 },
        shade: 1.0,
        ..rect_instance(bounds, layer)
    });
}

fn rect_instance(bounds: &Rect, layer: RenderLayer) -> RenderInstance {
    RenderInstance {
        x: bounds.left as f32,
        y: bounds.top as f32,
        width: bounds.width as f32,
        height: bounds.height as f32,
        layer: layer.as_u8() as f32,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::ImageId;

    #[test]
    fn tiles_become_shaded_fills() {
        let map = TileMap::from_grid(&[[0u8, 1]]);
        let mut buffer = RenderBuffer::new();
        draw_tilemap(&map, &mut buffer);

        assert_eq!(buffer.instance_count(), 2);
        let passable = buffer.instances[0];
        let blocking = buffer.instances[1];
        assert!(passable.is_solid());
        assert_eq!(passable.shade, PASSABLE_SHADE);
        assert_eq!(blocking.shade, BLOCKING_SHADE);
        assert_eq!(blocking.x, 12.5);
        assert_eq!(blocking.width, 25.0);
        assert_eq!(blocking.layer, RenderLayer::Terrain.as_u8() as f32);
    }

    #[test]
    fn sprite_carries_image_and_flip() {
        let image = ImageHandle::new(ImageId(7), 115.0, 74.0).flip(true);
        let bounds = Rect::new(142.5, 506.0, 115.0, 74.0);
        let mut buffer = RenderBuffer::new();
        draw_sprite(&bounds, image, RenderLayer::Objects, &mut buffer);

        let inst = buffer.instances[0];
        assert_eq!(inst.image, 7.0);
        assert_eq!(inst.flip, 1.0);
        assert_eq!(inst.x, 142.5);
        assert_eq!(inst.height, 74.0);
        assert_eq!(inst.layer, 1.0);
    }
}
