use crate::event::{Event, TableKind};
use crate::output::{OutputRecord, Record};
use crate::transformer::clock::{Clock, SystemClock};
use crate::transformer::config::TransformerConfig;
use crate::transformer::{customers, orders};
use log::debug;

/// Per-record stage of the pipeline. Must never fail on any input.
pub trait Transformer: Send + Sync {
    fn transform(&self, event: Event) -> Vec<OutputRecord>;
}

pub struct RecordTransformer<C = SystemClock> {
    config: TransformerConfig,
    clock: C,
}

impl RecordTransformer<SystemClock> {
    pub fn new(config: TransformerConfig) -> Self {
        RecordTransformer::with_clock(config, SystemClock)
    }
}

impl<C> RecordTransformer<C>
where
    C: Clock,
{
    pub fn with_clock(config: TransformerConfig, clock: C) -> Self {
        RecordTransformer { config, clock }
    }

    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    fn transform_orders(&self, event: Event, table: String) -> Vec<OutputRecord> {
        let order_event = orders::order_event(&event, self.clock.now());
        let mut output = vec![OutputRecord::routed(Record::Event(event), table)];

        if let Some(order_event) = order_event {
            debug!(
                "Order {} fans out to {} as {}",
                order_event.order_id, self.config.order_events_table, order_event.event_type
            );
            output.push(OutputRecord::routed(
                Record::OrderEvent(order_event),
                self.config.order_events_table.as_str(),
            ));
        }

        output
    }
}

impl<C> Transformer for RecordTransformer<C>
where
    C: Clock,
{
    fn transform(&self, mut event: Event) -> Vec<OutputRecord> {
        let table = match event.table(&self.config.table_field) {
            Some(table) => table.to_string(),
            None => {
                debug!("Event has no '{}', leaving it unrouted", self.config.table_field);
                return vec![OutputRecord::unrouted(Record::Event(event))];
            }
        };

        match TableKind::from(table.as_str()) {
            TableKind::Customers => {
                customers::derive_username(&mut event);
                vec![OutputRecord::routed(Record::Event(event), table)]
            }
            TableKind::Orders => self.transform_orders(event, table),
            TableKind::Feedback | TableKind::Other(_) => {
                vec![OutputRecord::routed(Record::Event(event), table)]
            }
        }
    }
}
