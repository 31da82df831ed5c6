use anyhow::{Context, Result, ensure};
use itertools::Itertools;

use crate::entities::{
    AllowedRotation, Container, ContainerStackValue, Instance, Stackable, StackableItem,
};
use crate::io::ext_repr::{ExtContainer, ExtInstance, ExtItem, ExtRotation};

/// Imports an instance into the library
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    ensure!(
        ext_instance.items.iter().map(|i| &i.id).all_unique(),
        "item ids must be unique"
    );
    ensure!(
        ext_instance.containers.iter().map(|c| &c.id).all_unique(),
        "container ids must be unique"
    );

    let items = ext_instance
        .items
        .iter()
        .map(|ext_item| import_item(ext_item).with_context(|| format!("item {}", ext_item.id)))
        .collect::<Result<Vec<_>>>()?;

    let containers = ext_instance
        .containers
        .iter()
        .map(|ext_cont| {
            import_container(ext_cont).with_context(|| format!("container {}", ext_cont.id))
        })
        .collect::<Result<Vec<_>>>()?;

    Instance::new(ext_instance.name.clone(), items, containers)
}

pub fn import_item(ext_item: &ExtItem) -> Result<StackableItem> {
    let [dx, dy, dz] = ext_item.dimensions;
    let rotation = match ext_item.rotation {
        ExtRotation::None => AllowedRotation::None,
        ExtRotation::TwoD => AllowedRotation::TwoD,
        ExtRotation::ThreeD => AllowedRotation::ThreeD,
    };
    let mut stackable = Stackable::new(dx, dy, dz, ext_item.weight, rotation)?.with_id(&ext_item.id);
    if let Some(description) = &ext_item.description {
        stackable = stackable.with_description(description);
    }
    StackableItem::new(stackable, ext_item.count)
}

pub fn import_container(ext_cont: &ExtContainer) -> Result<Container> {
    let [dx, dy, dz] = ext_cont.load_dimensions;
    let mut stack_values = vec![ContainerStackValue::new(dx, dy, dz, ext_cont.max_load_weight)?];
    if ext_cont.rotatable && dx != dy {
        stack_values.push(ContainerStackValue::new(dy, dx, dz, ext_cont.max_load_weight)?);
    }
    let mut container = Container::new(stack_values, ext_cont.empty_weight)?.with_id(&ext_cont.id);
    if let Some(description) = &ext_cont.description {
        container = container.with_description(description);
    }
    Ok(container)
}
