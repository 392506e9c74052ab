//! Navigation menu API client methods

use super::{ClientError, ErpClient};
use erp_core::MenuTree;

impl ErpClient {
    /// Menu tree of the signed-in user, with per-node permissions
    pub async fn navigation(&self) -> Result<MenuTree, ClientError> {
        let req = self.request(reqwest::Method::GET, "/api/v1/me/navigation");
        let tree: Option<MenuTree> = self.execute(req).await?;
        Ok(tree.unwrap_or_default())
    }
}
