use crate::domain::model::Dish;
use crate::domain::ports::DishStore;
use crate::utils::error::{InsightError, Result};
use std::sync::Arc;
use uuid::Uuid;

pub struct DishCatalogue {
    dishes: Arc<dyn DishStore>,
}

impl DishCatalogue {
    pub fn new(dishes: Arc<dyn DishStore>) -> Self {
        Self { dishes }
    }

    pub async fn dish_by_id(&self, dish_id: Uuid) -> Result<Dish> {
        self.dishes
            .find_dish_by_id(dish_id)
            .await?
            .ok_or(InsightError::DishNotFound { dish_id })
    }

    pub async fn dishes_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<Dish>> {
        self.dishes
            .find_dishes_by_vendor(vendor_id)
            .await?
            .ok_or(InsightError::VendorNotFound { vendor_id })
    }

    /// Dishes of the vendor that contain none of `allergies` (case-insensitive).
    pub async fn allergy_filtered_dishes(
        &self,
        vendor_id: Uuid,
        allergies: &[String],
    ) -> Result<Vec<Dish>> {
        let dishes = match self.dishes.find_dishes_by_vendor(vendor_id).await? {
            Some(dishes) if !dishes.is_empty() => dishes,
            _ => return Err(InsightError::VendorNotFound { vendor_id }),
        };

        let excluded: Vec<String> = allergies.iter().map(|a| a.to_lowercase()).collect();
        Ok(dishes
            .into_iter()
            .filter(|dish| {
                !dish
                    .allergies
                    .iter()
                    .any(|allergy| excluded.contains(&allergy.to_lowercase()))
            })
            .collect())
    }
}
