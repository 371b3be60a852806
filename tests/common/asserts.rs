#![allow(dead_code)]

use broadcast_cors_rs::{CorsResult, Flow, Headers};

pub fn assert_continue(result: CorsResult) -> Headers {
    match result.flow {
        Flow::Continue => result.headers,
        other => panic!("expected pipeline to continue, got {:?}", other),
    }
}

pub fn assert_halted(result: CorsResult) -> (Headers, u16) {
    match result.flow {
        Flow::Halt(status) => (result.headers, status),
        other => panic!("expected pipeline to halt, got {:?}", other),
    }
}
