//! WASM API for the interpreter.
//!
//! Provides JavaScript-callable interfaces for program loading, fetch/execute and
//! state inspection.

use wasm_bindgen::prelude::*;

use crate::{ExecutionError, Machine, MemoryBus};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for JsError {
    fn from(err: ExecutionError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// A machine exposed to JavaScript.
#[wasm_bindgen]
pub struct WasmMachine {
    machine: Machine,
}

#[wasm_bindgen]
impl WasmMachine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        WasmMachine {
            machine: Machine::new(),
        }
    }

    /// Append one byte at the program write cursor
    pub fn append(&mut self, value: u8) {
        self.machine.memory_mut().append(value);
    }

    /// Append a whole program at the write cursor
    pub fn load_program(&mut self, program: &[u8]) {
        self.machine.load_program(program);
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.machine.memory().read(addr)
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.machine.memory_mut().write(addr, value);
    }

    /// Copy `len` bytes starting at `start` into a fresh Uint8Array
    pub fn memory_slice(&self, start: u16, len: usize) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.machine.memory().slice(start, len))
    }

    /// Fetch the next opcode
    pub fn fetch(&mut self) -> u8 {
        self.machine.cpu_mut().fetch()
    }

    /// Execute the pending opcode. Returns false if it is not implemented.
    pub fn execute(&mut self) -> bool {
        self.machine.cpu_mut().execute().is_ok()
    }

    /// Fetch and execute a single instruction, returning its cycle count
    pub fn step(&mut self) -> Result<u32, JsError> {
        Ok(self.machine.step()? as u32)
    }

    pub fn set_x(&mut self, value: u8) {
        self.machine.cpu_mut().set_x(value);
    }

    pub fn set_y(&mut self, value: u8) {
        self.machine.cpu_mut().set_y(value);
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.machine.cpu().a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.machine.cpu().x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.machine.cpu().y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.machine.cpu().pc()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.machine.cpu().status().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> u32 {
        self.machine.cpu().cycles() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn negative(&self) -> bool {
        self.machine.cpu().is_negative_set()
    }

    #[wasm_bindgen(getter)]
    pub fn zero(&self) -> bool {
        self.machine.cpu().is_zero_set()
    }
}

impl Default for WasmMachine {
    fn default() -> Self {
        Self::new()
    }
}
