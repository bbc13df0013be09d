//! Background thread for the terminal UI so advice requests never block the
//! event loop. Requests go in over a channel, replies come back on another;
//! the UI polls with [`AdvisorWorker::try_recv`] each tick. A superseded
//! request is not cancelled, its late reply simply overwrites the result
//! slot when it lands.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::{Advice, Advisor, ChatTurn};
use crate::catalog::Enchantment;

#[derive(Debug)]
pub enum AdviceRequest {
    Advice {
        enchant: &'static Enchantment,
        context: String,
    },
    Build {
        item: String,
    },
    Chat {
        history: Vec<ChatTurn>,
        message: String,
    },
}

#[derive(Debug)]
pub enum AdviceReply {
    Advice {
        enchant_id: &'static str,
        advice: Advice,
    },
    Build {
        item: String,
        strategy: String,
    },
    Chat {
        text: String,
    },
}

pub struct AdvisorWorker {
    tx: Sender<AdviceRequest>,
    rx: Receiver<AdviceReply>,
    has_credentials: bool,
}

impl AdvisorWorker {
    /// Spawn the worker thread. The thread owns the memoizing [`Advisor`]
    /// and exits once the handle is dropped.
    pub fn spawn() -> Self {
        let (req_tx, req_rx) = mpsc::channel::<AdviceRequest>();
        let (reply_tx, reply_rx) = mpsc::channel::<AdviceReply>();

        let mut advisor = Advisor::from_env();
        let has_credentials = advisor.has_credentials();

        thread::spawn(move || {
            while let Ok(request) = req_rx.recv() {
                let reply = match request {
                    AdviceRequest::Advice { enchant, context } => AdviceReply::Advice {
                        enchant_id: enchant.id,
                        advice: advisor.advice(enchant, &context),
                    },
                    AdviceRequest::Build { item } => AdviceReply::Build {
                        strategy: advisor.build_strategy(&item),
                        item,
                    },
                    AdviceRequest::Chat { history, message } => AdviceReply::Chat {
                        text: advisor.chat(&history, &message),
                    },
                };

                if reply_tx.send(reply).is_err() {
                    break;
                }
            }
        });

        Self {
            tx: req_tx,
            rx: reply_rx,
            has_credentials,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.has_credentials
    }

    pub fn request(&self, request: AdviceRequest) {
        self.tx.send(request).ok();
    }

    /// Non-blocking poll for the next finished reply
    pub fn try_recv(&self) -> Option<AdviceReply> {
        self.rx.try_recv().ok()
    }
}
