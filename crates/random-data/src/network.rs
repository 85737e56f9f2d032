//! Network identifiers.

use std::net::{Ipv4Addr, Ipv6Addr};

use rand::{Rng, RngCore};

use crate::source::RandomSource;

impl<R: RngCore> RandomSource<R> {
    /// Returns an IPv4 address with four uniform octets.
    pub fn ipv4_address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.with_rng(|rng| rng.random::<[u8; 4]>()))
    }

    /// Returns an IPv6 address with sixteen uniform octets.
    pub fn ipv6_address(&self) -> Ipv6Addr {
        Ipv6Addr::from(self.with_rng(|rng| rng.random::<[u8; 16]>()))
    }

    /// Returns a MAC address as six lowercase hex octets joined by `:`.
    ///
    /// # Example
    ///
    /// ```
    /// use random_data::RandomSource;
    ///
    /// let mac = RandomSource::from_seed(9).mac_address();
    /// assert_eq!(mac.len(), 17);
    /// assert_eq!(mac.split(':').count(), 6);
    /// ```
    pub fn mac_address(&self) -> String {
        self.with_rng(|rng| rng.random::<[u8; 6]>())
            .iter()
            .map(|octet| format!("{octet:02x}"))
            .collect::<Vec<_>>()
            .join(":")
    }
}
