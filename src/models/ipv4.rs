//! IPv4 address and CIDR block arithmetic.
//!
//! Provides [`Ipv4`] for an address with a prefix length, along with the bit
//! level helpers that compute the network (lowest) and broadcast (highest)
//! address of a block.

use crate::error::{OverlapError, Result};
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use range_overlap::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(OverlapError::InvalidMask {
            input: format!("/{len}"),
        })
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Convert a subnet mask back to its prefix length.
///
/// Fails when the set bits of the mask are not contiguous from the top.
pub fn mask_to_prefix(mask: u32) -> Result<u8> {
    let len = mask.leading_ones() as u8;
    if get_cidr_mask(len)? != mask {
        return Err(OverlapError::InvalidMask {
            input: Ipv4Addr::from(mask).to_string(),
        });
    }
    Ok(len)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Inclusive bounds of the block described by raw address and mask octets.
///
/// Each octet is computed on its own: `lower = addr & mask` and
/// `upper = addr | !mask`.
pub fn octet_bounds(addr: &[u8], mask: &[u8]) -> Result<(Ipv4Addr, Ipv4Addr)> {
    let addr: [u8; 4] = addr.try_into().map_err(|_| OverlapError::InvalidAddress {
        input: format!("{addr:?}"),
    })?;
    let mask: [u8; 4] = mask.try_into().map_err(|_| OverlapError::InvalidMask {
        input: format!("{mask:?}"),
    })?;
    mask_to_prefix(u32::from_be_bytes(mask))?;

    let mut lower = [0u8; 4];
    let mut upper = [0u8; 4];
    for i in 0..4 {
        lower[i] = addr[i] & mask[i];
        upper[i] = addr[i] | !mask[i];
    }
    Ok((Ipv4Addr::from(lower), Ipv4Addr::from(upper)))
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address, not necessarily aligned to the block.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Parse a CIDR string such as `10.0.0.0/24` or `10.0.0.0/255.255.255.0`.
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let addr_cidr = addr_cidr.trim();
        let (addr_part, mask_part) = addr_cidr
            .split_once('/')
            .ok_or_else(|| OverlapError::invalid_cidr(addr_cidr, "missing '/'"))?;

        let addr = match addr_part.parse::<IpAddr>() {
            Ok(IpAddr::V4(addr)) => addr,
            Ok(IpAddr::V6(_)) => {
                return Err(OverlapError::NotIpv4 {
                    input: addr_part.to_string(),
                })
            }
            Err(_) => {
                return Err(OverlapError::invalid_cidr(
                    addr_cidr,
                    format!("invalid address {addr_part}"),
                ))
            }
        };
        let mask = parse_mask(addr_cidr, mask_part)?;

        Ok(Ipv4 { addr, mask })
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Result<Ipv4Addr> {
        cut_addr(self.addr, self.mask)
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Result<Ipv4Addr> {
        broadcast_addr(self.addr, self.mask)
    }

    /// Both inclusive bounds of the block.
    pub fn bounds(&self) -> Result<(Ipv4Addr, Ipv4Addr)> {
        let mask = get_cidr_mask(self.mask)?;
        octet_bounds(&self.addr.octets(), &mask.to_be_bytes())
    }
}

/// Prefix length from either `24` or `255.255.255.0`.
fn parse_mask(input: &str, mask_part: &str) -> Result<u8> {
    if mask_part.contains('.') {
        let mask: Ipv4Addr = mask_part
            .parse()
            .map_err(|_| OverlapError::invalid_cidr(input, format!("invalid mask {mask_part}")))?;
        return mask_to_prefix(u32::from(mask));
    }
    if mask_part.is_empty() || !mask_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OverlapError::invalid_cidr(
            input,
            format!("invalid prefix length {mask_part}"),
        ));
    }
    // All digits, so only overflow can fail here.
    let len: u32 = mask_part
        .parse()
        .map_err(|_| OverlapError::InvalidMask {
            input: format!("/{mask_part}"),
        })?;
    if len > MAX_LENGTH as u32 {
        return Err(OverlapError::InvalidMask {
            input: format!("/{len}"),
        });
    }
    Ok(len as u8)
}

impl FromStr for Ipv4 {
    type Err = OverlapError;

    fn from_str(s: &str) -> Result<Ipv4> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
