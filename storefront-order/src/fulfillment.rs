use storefront_catalog::{ProductError, Refund};

/// Result of one refund attempt inside a bulk refund
#[derive(Debug, Clone, PartialEq)]
pub enum RefundOutcome {
    Refunded(Refund),
    Rejected(ProductError),
}

/// Per-product outcomes of [`crate::Order::refund_all`], in order of the
/// order's product list. Products without the refund capability do not
/// appear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefundReport {
    pub outcomes: Vec<RefundOutcome>,
}

impl RefundReport {
    pub fn refunded(&self) -> impl Iterator<Item = &Refund> {
        self.outcomes.iter().filter_map(|o| match o {
            RefundOutcome::Refunded(refund) => Some(refund),
            RefundOutcome::Rejected(_) => None,
        })
    }

    pub fn rejected(&self) -> impl Iterator<Item = &ProductError> {
        self.outcomes.iter().filter_map(|o| match o {
            RefundOutcome::Rejected(err) => Some(err),
            RefundOutcome::Refunded(_) => None,
        })
    }

    pub fn refunded_total(&self) -> f64 {
        self.refunded().map(|r| r.amount).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.rejected().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_partitions_outcomes() {
        let report = RefundReport {
            outcomes: vec![
                RefundOutcome::Refunded(Refund {
                    product_id: "b1".to_string(),
                    amount: 200.0,
                    description: "Refunding book: Java Basics".to_string(),
                }),
                RefundOutcome::Rejected(ProductError::NonRefundable {
                    product_id: "l1".to_string(),
                    message: "Laptop ThinkPad X1 cannot be refunded!".to_string(),
                }),
                RefundOutcome::Refunded(Refund {
                    product_id: "p1".to_string(),
                    amount: 2500.0,
                    description: "Refunding phone: iPhone 15".to_string(),
                }),
            ],
        };

        assert_eq!(report.refunded().count(), 2);
        assert_eq!(report.rejected().count(), 1);
        assert_eq!(report.refunded_total(), 2700.0);
        assert!(!report.is_clean());
        assert!(RefundReport::default().is_clean());
    }
}
