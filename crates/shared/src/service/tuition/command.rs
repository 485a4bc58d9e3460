use super::ensure_owned_invoice;
use crate::{
    abstract_trait::tuition::{
        DynInstallmentCommandRepository, DynInstallmentQueryRepository, DynInvoiceQueryRepository,
        TuitionCommandServiceTrait,
    },
    domain::{
        requests::tuition::PayInstallmentRequest,
        responses::{ApiResponse, PayInstallmentResponse},
    },
    errors::ServiceError,
    service::validate,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct TuitionCommandService {
    invoices: DynInvoiceQueryRepository,
    installments: DynInstallmentQueryRepository,
    command: DynInstallmentCommandRepository,
}

impl TuitionCommandService {
    pub fn new(
        invoices: DynInvoiceQueryRepository,
        installments: DynInstallmentQueryRepository,
        command: DynInstallmentCommandRepository,
    ) -> Self {
        Self {
            invoices,
            installments,
            command,
        }
    }
}

#[async_trait]
impl TuitionCommandServiceTrait for TuitionCommandService {
    async fn pay_installment(
        &self,
        student_id: &str,
        req: &PayInstallmentRequest,
    ) -> Result<ApiResponse<PayInstallmentResponse>, ServiceError> {
        validate(req)?;

        let PayInstallmentRequest {
            invoice_id,
            installment_no,
        } = *req;

        info!("💳 Student {student_id} paying installment {invoice_id}/{installment_no}");

        ensure_owned_invoice(&self.invoices, student_id, invoice_id).await?;

        let affected = self
            .command
            .mark_paid(invoice_id, installment_no)
            .await
            .map_err(|e| {
                error!("❌ Failed to pay installment {invoice_id}/{installment_no}: {e:?}");
                ServiceError::Repo(e)
            })?;

        let installment = self
            .installments
            .find_one(invoice_id, installment_no)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "Installment {installment_no} of invoice {invoice_id} not found"
                ))
            })?;

        if !installment.is_paid() {
            error!("❌ Installment {invoice_id}/{installment_no} still unpaid after update");
            return Err(ServiceError::Internal(
                "installment could not be marked paid".to_string(),
            ));
        }

        let already_paid = affected == 0;
        let message = if already_paid {
            info!("ℹ️ Installment {invoice_id}/{installment_no} was already paid");
            "Installment was already paid"
        } else {
            info!("✅ Installment {invoice_id}/{installment_no} paid");
            "Installment paid successfully"
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: message.to_string(),
            data: PayInstallmentResponse {
                invoice_id,
                installment_no,
                paid_date: installment.paid_date.map(|d| d.to_string()),
                affected_rows: affected,
                already_paid,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::tuition::TuitionQueryServiceTrait,
        service::tuition::TuitionQueryService,
        testing::{InMemoryStore, installment, invoice},
    };
    use std::sync::Arc;

    fn seeded() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        store.add_invoice(invoice(10, "S1", 2025, "SPRING", 3_000_000));
        store.add_invoice(invoice(20, "S2", 2025, "SPRING", 3_000_000));
        for no in 1..=3 {
            store.add_installment(installment(10, no, 1_000_000));
            store.add_installment(installment(20, no, 1_000_000));
        }
        store
    }

    fn command(store: &Arc<InMemoryStore>) -> TuitionCommandService {
        TuitionCommandService::new(store.clone(), store.clone(), store.clone())
    }

    fn pay(invoice_id: i32, installment_no: i32) -> PayInstallmentRequest {
        PayInstallmentRequest {
            invoice_id,
            installment_no,
        }
    }

    #[tokio::test]
    async fn paying_twice_keeps_the_first_timestamp() {
        let store = seeded();
        let svc = command(&store);

        let first = svc.pay_installment("S1", &pay(10, 1)).await.unwrap();
        let stamped = store.installment(10, 1).unwrap().paid_date;

        let second = svc.pay_installment("S1", &pay(10, 1)).await.unwrap();

        assert_eq!(first.data.affected_rows, 1);
        assert!(!first.data.already_paid);
        assert_eq!(second.data.affected_rows, 0);
        assert!(second.data.already_paid);
        assert_eq!(store.installment(10, 1).unwrap().paid_date, stamped);
        assert_eq!(second.data.paid_date, first.data.paid_date);
    }

    #[tokio::test]
    async fn paid_amount_tracks_payments() {
        let store = seeded();
        let svc = command(&store);
        let query = TuitionQueryService::new(store.clone(), store.clone());

        svc.pay_installment("S1", &pay(10, 1)).await.unwrap();
        svc.pay_installment("S1", &pay(10, 2)).await.unwrap();
        assert_eq!(query.compute_paid_amount(10).await.unwrap(), 2_000_000);

        svc.pay_installment("S1", &pay(10, 3)).await.unwrap();
        assert_eq!(query.compute_paid_amount(10).await.unwrap(), 3_000_000);
    }

    #[tokio::test]
    async fn missing_installment_is_not_found() {
        let store = seeded();

        let res = command(&store).pay_installment("S1", &pay(10, 9)).await;

        assert!(matches!(res, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn cannot_pay_another_students_installment() {
        let store = seeded();

        let res = command(&store).pay_installment("S1", &pay(20, 1)).await;

        assert!(matches!(res, Err(ServiceError::Forbidden(_))));
        assert!(store.installment(20, 1).unwrap().paid_date.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_payments_write_once() {
        let store = seeded();
        let svc = Arc::new(command(&store));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let svc = svc.clone();
                tokio::spawn(async move { svc.pay_installment("S1", &pay(10, 2)).await })
            })
            .collect();

        let mut affected = 0;
        let mut paid_dates = Vec::new();
        for handle in handles {
            let res = handle.await.unwrap().unwrap();
            affected += res.data.affected_rows;
            paid_dates.push(res.data.paid_date);
        }

        assert_eq!(affected, 1);
        assert!(paid_dates.iter().all(|d| *d == paid_dates[0]));
        assert!(store.installment(10, 2).unwrap().paid_date.is_some());
    }
}
