use super::constants::{ASSET_EVENT_TYPE_KEY, ASSET_ID_KEY, NEW_VALUE_KEY};

pub enum EventType {
    InstantiateContract,
    MigrateContract,
    CreateAsset,
    UpdateAsset,
    DeleteAsset,
}
#[allow(clippy::from_over_into)]
impl Into<String> for EventType {
    fn into(self) -> String {
        match self {
            EventType::InstantiateContract => "instantiate_contract",
            EventType::MigrateContract => "migrate_contract",
            EventType::CreateAsset => "create_asset",
            EventType::UpdateAsset => "update_asset",
            EventType::DeleteAsset => "delete_asset",
        }
        .into()
    }
}
impl EventType {
    pub fn event_name(self) -> String {
        self.into()
    }
}

pub struct EventAttributes {
    attributes: Vec<(String, String)>,
}
impl EventAttributes {
    pub fn new(event_type: EventType) -> Self {
        EventAttributes {
            attributes: vec![(ASSET_EVENT_TYPE_KEY.into(), event_type.into())],
        }
    }

    pub fn for_asset_event<T: Into<String>>(event_type: EventType, asset_id: T) -> Self {
        Self::new(event_type).set_asset_id(asset_id)
    }

    pub fn set_asset_id<T: Into<String>>(mut self, asset_id: T) -> Self {
        self.attributes.push((ASSET_ID_KEY.into(), asset_id.into()));
        self
    }

    pub fn set_new_value<T: ToString>(mut self, new_value: T) -> Self {
        self.attributes
            .push((NEW_VALUE_KEY.into(), new_value.to_string()));
        self
    }
}

impl IntoIterator for EventAttributes {
    type Item = (String, String);

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}
