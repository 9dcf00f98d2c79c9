//! Demo device: the command catalog the binary ships with.
//!
//! Handlers share one [`DeviceState`] through `Rc<RefCell<_>>`; the session
//! is single-threaded.

use std::cell::RefCell;
use std::net::Ipv4Addr;
use std::rc::Rc;

use nodesh_terminal::{
    CommandOutput, CommandPattern, ModuleCommand, NodeCatalog, register_builtins,
};
use nodesh_types::error::CommandError;

/// Smallest and largest accepted interface MTU.
const MTU_RANGE: std::ops::RangeInclusive<u32> = 68..=9000;

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceState {
    pub address: Option<(Ipv4Addr, Ipv4Addr)>,
    pub description: Option<String>,
    pub mtu: u32,
    pub shutdown: bool,
}

impl Default for InterfaceState {
    fn default() -> Self {
        Self {
            address: None,
            description: None,
            mtu: 1500,
            shutdown: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceState {
    pub hostname: String,
    pub interface: InterfaceState,
    pub router_id: Option<Ipv4Addr>,
    pub areas: Vec<String>,
}

impl DeviceState {
    pub fn new(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            ..Self::default()
        }
    }

    /// Running configuration in display form.
    fn running_config(&self) -> String {
        let mut out = format!("hostname {}\n!\ninterface\n", self.hostname);
        if let Some((addr, mask)) = self.interface.address {
            out.push_str(&format!(" ip address {addr} {mask}\n"));
        }
        if let Some(desc) = &self.interface.description {
            out.push_str(&format!(" description {desc}\n"));
        }
        out.push_str(&format!(" mtu {}\n", self.interface.mtu));
        if self.interface.shutdown {
            out.push_str(" shutdown\n");
        }
        out.push_str("!\nrouter\n");
        if let Some(id) = self.router_id {
            out.push_str(&format!(" router-id {id}\n"));
        }
        for area in &self.areas {
            out.push_str(&format!(" network\n  area {area}\n"));
        }
        out.push('!');
        out
    }
}

pub type SharedDevice = Rc<RefCell<DeviceState>>;

/// Build the full catalog, builtins included.
pub fn build_catalog(device: &SharedDevice) -> NodeCatalog {
    let mut cat = NodeCatalog::new();

    cat.add_root(CommandPattern::new("show version", |_: Option<&[String]>| {
        Ok(CommandOutput::Text(format!(
            "nodesh {}",
            env!("CARGO_PKG_VERSION")
        )))
    }));
    let dev = Rc::clone(device);
    cat.add_root(CommandPattern::new("show running-config", move |_: Option<&[String]>| {
        Ok(CommandOutput::Text(dev.borrow().running_config()))
    }));
    // Placeholder until reload is wired to the host.
    cat.add_root(
        CommandPattern::new("reload", |_: Option<&[String]>| Ok(CommandOutput::None)).disabled(),
    );

    let dev = Rc::clone(device);
    cat.add_configure(
        CommandPattern::new("hostname", move |args: Option<&[String]>| {
            let name = single_arg(args)?;
            dev.borrow_mut().hostname = name.to_string();
            Ok(CommandOutput::None)
        })
        .with_usage("hostname <name>"),
    );
    cat.add_configure(interface_module(device));
    cat.add_configure(router_module(device));

    register_builtins(&mut cat);
    cat
}

fn interface_module(device: &SharedDevice) -> ModuleCommand {
    let dev = Rc::clone(device);
    let ip_address = CommandPattern::new("ip address", move |args: Option<&[String]>| {
        let [addr, mask] = args.unwrap_or_default() else {
            return Err(CommandError::Usage("expected address and mask".into()));
        };
        let addr = parse_ipv4(addr)?;
        let mask = parse_ipv4(mask)?;
        dev.borrow_mut().interface.address = Some((addr, mask));
        Ok(CommandOutput::None)
    })
    .with_usage("ip address <a.b.c.d> <mask>");

    let dev = Rc::clone(device);
    let description = CommandPattern::new("description", move |args: Option<&[String]>| {
        let words = args.ok_or_else(|| CommandError::Usage("missing text".into()))?;
        dev.borrow_mut().interface.description = Some(words.join(" "));
        Ok(CommandOutput::None)
    })
    .with_usage("description <text>");

    let dev = Rc::clone(device);
    let mtu = CommandPattern::new("mtu", move |args: Option<&[String]>| {
        let value: u32 = single_arg(args)?.parse()?;
        if !MTU_RANGE.contains(&value) {
            return Err(CommandError::Validation(format!(
                "mtu must be between {} and {}",
                MTU_RANGE.start(),
                MTU_RANGE.end()
            )));
        }
        dev.borrow_mut().interface.mtu = value;
        Ok(CommandOutput::None)
    })
    .with_usage("mtu <bytes>");

    let dev = Rc::clone(device);
    let no_shutdown = CommandPattern::new("no shutdown", move |_: Option<&[String]>| {
        dev.borrow_mut().interface.shutdown = false;
        Ok(CommandOutput::None)
    });
    let dev = Rc::clone(device);
    let shutdown = CommandPattern::new("shutdown", move |_: Option<&[String]>| {
        let mut dev = dev.borrow_mut();
        if dev.interface.shutdown {
            // Already down.
            return Ok(CommandOutput::Failure);
        }
        dev.interface.shutdown = true;
        Ok(CommandOutput::None)
    });

    ModuleCommand::new("interface")
        .with(ip_address)
        .with(description)
        .with(mtu)
        .with(no_shutdown)
        .with(shutdown)
}

fn router_module(device: &SharedDevice) -> ModuleCommand {
    let dev = Rc::clone(device);
    let router_id = CommandPattern::new("router-id", move |args: Option<&[String]>| {
        let id = parse_ipv4(single_arg(args)?)?;
        dev.borrow_mut().router_id = Some(id);
        Ok(CommandOutput::None)
    })
    .with_usage("router-id <a.b.c.d>");

    let dev = Rc::clone(device);
    let area = CommandPattern::new("area", move |args: Option<&[String]>| {
        let area = single_arg(args)?;
        dev.borrow_mut().areas.push(area.to_string());
        Ok(CommandOutput::None)
    })
    .with_usage("area <id>");

    ModuleCommand::new("router")
        .with(router_id)
        .with(ModuleCommand::new("network").with(area))
}

fn single_arg(args: Option<&[String]>) -> Result<&str, CommandError> {
    match args {
        Some([one]) => Ok(one.as_str()),
        Some(_) => Err(CommandError::Usage("expected exactly one argument".into())),
        None => Err(CommandError::Usage("missing argument".into())),
    }
}

fn parse_ipv4(text: &str) -> Result<Ipv4Addr, CommandError> {
    text.parse()
        .map_err(|_| CommandError::Validation(format!("invalid IPv4 address: {text}")))
}
