//! Hijack transport: answers address queries locally from static configuration.
//!
//! No server is ever contacted. A and AAAA questions are answered with the
//! configured address when there is one; everything else, including an
//! unconfigured family, gets a successful response with no answers.

use super::{Lifecycle, Transport, TransportOptions, TransportRegistry, DEFAULT_TTL};
use crate::dns::logger::{LogField, TransportLogger};
use async_trait::async_trait;
use dns_transport_domain::{DomainStrategy, TransportError};
use hickory_proto::op::{Message, MessageType, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{RData, Record, RecordType};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const SCHEMES: &[&str] = &["hijack"];

pub struct HijackTransport {
    name: String,
    lifecycle: Lifecycle,
    logger: TransportLogger,
    inet4_response: Option<Ipv4Addr>,
    inet6_response: Option<Ipv6Addr>,
}

impl HijackTransport {
    pub fn new(options: TransportOptions) -> Result<Self, TransportError> {
        Ok(Self {
            lifecycle: Lifecycle::new(&options.context),
            name: options.name,
            logger: options.logger,
            inet4_response: options.inet4_response,
            inet6_response: options.inet6_response,
        })
    }

    /// Factory entry for [`TransportRegistry`].
    pub fn create(options: TransportOptions) -> Result<Arc<dyn Transport>, TransportError> {
        Ok(Arc::new(Self::new(options)?))
    }

    pub fn register(registry: &mut TransportRegistry) {
        registry.register(SCHEMES, Self::create);
    }

    pub fn inet4_response(&self) -> Option<Ipv4Addr> {
        self.inet4_response
    }

    pub fn inet6_response(&self) -> Option<Ipv6Addr> {
        self.inet6_response
    }

    fn answer_for(&self, query_type: RecordType) -> Option<RData> {
        match query_type {
            RecordType::A => self.inet4_response.map(|addr| RData::A(A(addr))),
            RecordType::AAAA => self.inet6_response.map(|addr| RData::AAAA(AAAA(addr))),
            _ => None,
        }
    }

    /// Response carrying the query's id and its question section verbatim.
    fn synthesize(&self, message: &Message, question: &Query) -> Message {
        let mut response = Message::new(message.id(), MessageType::Response, message.op_code());
        response.set_response_code(ResponseCode::NoError);
        for query in message.queries() {
            response.add_query(query.clone());
        }

        // from_rdata sets class IN
        if let Some(rdata) = self.answer_for(question.query_type()) {
            response.add_answer(Record::from_rdata(
                question.name().clone(),
                DEFAULT_TTL,
                rdata,
            ));
        }

        debug!(
            transport = %self.name,
            domain = %question.name(),
            record_type = ?question.query_type(),
            answers = response.answers().len(),
            "Hijacked DNS query"
        );

        response
    }
}

#[async_trait]
impl Transport for HijackTransport {
    fn name(&self) -> &str {
        &self.name
    }

    async fn start(&self) -> Result<(), TransportError> {
        Ok(())
    }

    fn reset(&self) {}

    fn close(&self) -> Result<(), TransportError> {
        self.lifecycle.close();
        Ok(())
    }

    fn raw(&self) -> bool {
        true
    }

    // Only the transport's own lifecycle is consulted; `ctx` is used for logging.
    async fn exchange(
        &self,
        ctx: &CancellationToken,
        message: &Message,
    ) -> Result<Message, TransportError> {
        self.lifecycle.check()?;

        let questions = message.queries();
        if questions.len() != 1 {
            let count = questions.len();
            self.logger.info(
                ctx,
                "bad question count",
                &[LogField::new("question_count", &count)],
            );
            return Err(TransportError::InvalidQuery(count));
        }

        Ok(self.synthesize(message, &questions[0]))
    }

    async fn lookup(
        &self,
        _ctx: &CancellationToken,
        _domain: &str,
        _strategy: DomainStrategy,
    ) -> Result<Vec<IpAddr>, TransportError> {
        Err(TransportError::UnsupportedOperation(
            "lookup is not available on a raw transport",
        ))
    }
}
