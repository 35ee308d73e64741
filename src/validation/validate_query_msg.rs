use crate::core::msg::QueryMsg;
use crate::util::aliases::AssetResult;

use super::validate_execute_msg::validate_asset_id;

pub fn validate_query_msg(msg: &QueryMsg) -> AssetResult<()> {
    match msg {
        QueryMsg::AssetExists { asset_id } => validate_asset_id("QueryMsg::AssetExists", asset_id),
        QueryMsg::ReadAsset { asset_id } => validate_asset_id("QueryMsg::ReadAsset", asset_id),
        QueryMsg::QueryContractMetadata {} | QueryMsg::QueryVersion {} => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::core::msg::QueryMsg;

    use super::validate_query_msg;

    #[test]
    fn test_query_validation() {
        validate_query_msg(&QueryMsg::AssetExists {
            asset_id: "".to_string(),
        })
        .expect_err("an empty asset id should be rejected for exists");
        validate_query_msg(&QueryMsg::ReadAsset {
            asset_id: "".to_string(),
        })
        .expect_err("an empty asset id should be rejected for read");
        validate_query_msg(&QueryMsg::ReadAsset {
            asset_id: "asset1".to_string(),
        })
        .expect("a populated asset id should be accepted");
        validate_query_msg(&QueryMsg::QueryVersion {}).expect("version queries have no fields");
    }
}
