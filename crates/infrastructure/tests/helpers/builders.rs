#![allow(dead_code)]
use dns_transport_infrastructure::dns::{HijackTransport, TransportLogger, TransportOptions};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use tokio_util::sync::CancellationToken;

pub struct QueryBuilder {
    id: u16,
    questions: Vec<(String, RecordType)>,
}

impl QueryBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            questions: Vec::new(),
        }
    }

    pub fn a(id: u16, name: &str) -> Message {
        Self::new(id).question(name, RecordType::A).build()
    }

    pub fn aaaa(id: u16, name: &str) -> Message {
        Self::new(id).question(name, RecordType::AAAA).build()
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.questions.push((name.to_string(), record_type));
        self
    }

    pub fn build(self) -> Message {
        let mut message = Message::new(self.id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        for (name, record_type) in self.questions {
            message.add_query(Query::query(Name::from_str(&name).unwrap(), record_type));
        }
        message
    }
}

pub struct HijackBuilder {
    options: TransportOptions,
}

impl HijackBuilder {
    pub fn new() -> Self {
        Self {
            options: TransportOptions::new("hijack-test", "hijack"),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.options.name = name.to_string();
        self
    }

    pub fn inet4(mut self, addr: &str) -> Self {
        self.options.inet4_response = Some(Ipv4Addr::from_str(addr).unwrap());
        self
    }

    pub fn inet6(mut self, addr: &str) -> Self {
        self.options.inet6_response = Some(Ipv6Addr::from_str(addr).unwrap());
        self
    }

    pub fn context(mut self, context: CancellationToken) -> Self {
        self.options.context = context;
        self
    }

    pub fn logger(mut self, logger: TransportLogger) -> Self {
        self.options.logger = logger;
        self
    }

    pub fn options(self) -> TransportOptions {
        self.options
    }

    pub fn build(self) -> HijackTransport {
        HijackTransport::new(self.options).unwrap()
    }
}
