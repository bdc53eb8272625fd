use anyhow::{Result, ensure};
use itertools::Itertools;

use sheetpack::geometry::primitives::{Point, Rect, RectSize, SPolygon};

use crate::io::ext_repr::{ExtInstance, ExtItemCopy, ExtShape};
use crate::opt::PackItem;

/// An [`ExtInstance`] with every item copy expanded and reduced to a [`PackItem`].
#[derive(Clone, Debug)]
pub struct Instance {
    pub name: String,
    /// Original shape of every copy
    pub shapes: Vec<SPolygon>,
    pub items: Vec<PackItem>,
    /// Which external item and copy each entry corresponds to
    pub copies: Vec<ExtItemCopy>,
    pub sheet: Option<RectSize>,
}

impl Instance {
    pub fn n_items(&self) -> usize {
        self.items.len()
    }
}

/// Imports an instance into the library
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    ensure!(
        ext_instance.items.iter().map(|item| item.id).all_unique(),
        "all items should have unique IDs. IDs: {:?}",
        ext_instance.items.iter().map(|item| item.id).sorted().collect_vec()
    );

    let mut shapes = vec![];
    let mut items = vec![];
    let mut copies = vec![];

    for ext_item in ext_instance.items.iter().filter(|item| item.quantity > 0) {
        let (shape, item) = import_shape(&ext_item.shape)?;
        for copy in 0..ext_item.quantity {
            shapes.push(shape.clone());
            items.push(item.clone());
            copies.push(ExtItemCopy {
                item_id: ext_item.id,
                copy,
            });
        }
    }

    ensure!(
        !items.is_empty(),
        "instance must have at least one item with a positive quantity"
    );

    if let Some(sheet) = ext_instance.sheet {
        ensure!(sheet.is_valid(), "invalid sheet size: {sheet:?}");
    }

    Ok(Instance {
        name: ext_instance.name.clone(),
        shapes,
        items,
        copies,
        sheet: ext_instance.sheet,
    })
}

fn import_shape(ext_shape: &ExtShape) -> Result<(SPolygon, PackItem)> {
    match ext_shape {
        ExtShape::Rectangle { width, height } => {
            let size = RectSize::new(*width, *height);
            ensure!(size.is_valid(), "invalid rectangle: {size:?}");
            let rect = Rect::from_origin_size(Point(0.0, 0.0), size);
            let shape = SPolygon::new(rect.corners().to_vec())?;
            Ok((shape, PackItem::from_size(size)))
        }
        ExtShape::SimplePolygon(points) => {
            let shape = SPolygon::new(points.iter().map(|&p| Point::from(p)).collect())?;
            let item = PackItem::from_polygon(&shape)?;
            Ok((shape, item))
        }
    }
}
