//! Category endpoints

use serde_json::json;

use crate::models::Category;

pub async fn list() -> Result<Vec<Category>, String> {
    super::get("/categories", "categories").await
}

pub async fn create(
    title: &str,
    description: &str,
    color: &str,
    icon: &str,
    department: &str,
) -> Result<Category, String> {
    let value = super::post(
        "/categories",
        json!({
            "titre": title,
            "description": description,
            "couleur": color,
            "icone": icon,
            "departement": department,
        }),
    )
    .await?;
    super::take_field(&value, "category")
}

pub async fn delete(id: u32) -> Result<(), String> {
    super::delete(&format!("/categories/{id}")).await
}
