use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ValidationError};
use crate::inventory::Inventory;
use crate::store::DataStore;

/// The UI's "add or remove" choice. Reduced to a signed delta before it
/// reaches the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAdjustment {
    Add(u64),
    Remove(u64),
}

impl StockAdjustment {
    pub fn delta(self) -> std::result::Result<i64, ValidationError> {
        let (amount, sign) = match self {
            StockAdjustment::Add(n) => (n, 1),
            StockAdjustment::Remove(n) => (n, -1),
        };
        if amount == 0 {
            return Err(ValidationError::ZeroAmount);
        }
        let amount =
            i64::try_from(amount).map_err(|_| ValidationError::Overflow { field: "amount" })?;
        Ok(sign * amount)
    }
}

pub fn run<S: DataStore>(
    inventory: &mut Inventory<S>,
    id: u64,
    adjustment: StockAdjustment,
) -> Result<CmdResult> {
    let delta = adjustment.delta()?;
    let saved = inventory.update_stock(id, delta)?;
    let record = inventory.find_by_id(id)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Stock updated successfully! {} now has {} in stock",
        record.name(),
        saved.value
    )));
    result.note_save_error(saved.save_error);
    result.affected_items.push(record);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::store::memory::fixtures::{generic, InventoryFixture};

    #[test]
    fn delta_carries_the_sign() {
        assert_eq!(StockAdjustment::Add(3).delta().unwrap(), 3);
        assert_eq!(StockAdjustment::Remove(3).delta().unwrap(), -3);
    }

    #[test]
    fn zero_amount_is_rejected() {
        assert_eq!(
            StockAdjustment::Add(0).delta().unwrap_err(),
            ValidationError::ZeroAmount
        );
    }

    #[test]
    fn huge_amount_is_rejected() {
        assert!(StockAdjustment::Remove(u64::MAX).delta().is_err());
    }

    #[test]
    fn adding_stock() {
        let mut inventory = InventoryFixture::new()
            .with_item(generic("Tape", "Office", 2))
            .inventory;
        let result = run(&mut inventory, 1, StockAdjustment::Add(8)).unwrap();

        assert_eq!(result.affected_items[0].quantity(), 10);
        assert_eq!(inventory.find_by_id(1).unwrap().quantity(), 10);
    }

    #[test]
    fn removing_down_to_zero() {
        let mut inventory = InventoryFixture::new()
            .with_item(generic("Tape", "Office", 2))
            .inventory;
        let result = run(&mut inventory, 1, StockAdjustment::Remove(2)).unwrap();
        assert_eq!(result.affected_items[0].quantity(), 0);
    }

    #[test]
    fn removing_more_than_available_is_refused() {
        let mut inventory = InventoryFixture::new()
            .with_item(generic("Tape", "Office", 2))
            .inventory;
        let err = run(&mut inventory, 1, StockAdjustment::Remove(3)).unwrap_err();

        assert!(matches!(err, StockError::WouldGoNegative { .. }));
        assert_eq!(inventory.find_by_id(1).unwrap().quantity(), 2);
    }

    #[test]
    fn unknown_item() {
        let mut inventory = InventoryFixture::new().inventory;
        assert!(matches!(
            run(&mut inventory, 9, StockAdjustment::Add(1)),
            Err(StockError::NotFound(9))
        ));
    }
}
