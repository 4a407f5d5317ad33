//! Host callables injected into the guest environment.

use mlua::{Function, Lua, Value, Variadic};

use crate::engine::sink::OutputSink;

/// The fixed set of host functions a guest program can call.
///
/// Built once per run and installed into the interpreter's globals before
/// evaluation starts; the guest has no other channel back to the host.
pub struct HostBindings {
    sink: OutputSink,
}

impl HostBindings {
    pub fn new(sink: OutputSink) -> Self {
        HostBindings { sink }
    }

    /// Install the bindings into `lua`'s global table.
    ///
    /// `print` renders each argument with the engine's own `tostring`, joins
    /// them with tabs and pushes the result to the output sink. The stock
    /// `print` would write straight to the terminal underneath the UI.
    pub fn install(&self, lua: &Lua) -> mlua::Result<()> {
        let sink = self.sink.clone();
        let print = lua.create_function(move |lua, args: Variadic<Value>| {
            let tostring: Function = lua.globals().get("tostring")?;
            let mut rendered = Vec::with_capacity(args.len());
            for value in args.iter() {
                let text: mlua::String = tostring.call(value.clone())?;
                rendered.push(text.to_string_lossy().to_string());
            }
            sink.push(rendered.join("\t"));
            Ok(())
        })?;
        lua.globals().set("print", print)
    }
}
