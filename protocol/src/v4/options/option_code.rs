//! DHCP option codes module.

use std::fmt;

/// DHCP option codes.
///
/// [RFC 2132](https://tools.ietf.org/html/rfc2132)
/// [RFC 3004](https://tools.ietf.org/html/rfc3004)
/// [RFC 3442](https://tools.ietf.org/html/rfc3442)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionCode {
    Pad,

    /*
    RFC 2132
    */
    // RFC 1497 Vendor Extensions (RFC 2132 §3)
    SubnetMask,
    TimeOffset,
    Router,
    TimeServer,
    NameServer,
    DomainNameServer,
    LogServer,
    QuoteServer,
    LprServer,
    ImpressServer,
    ResourceLocationServer,
    HostName,
    BootFileSize,
    MeritDumpFile,
    DomainName,
    SwapServer,
    RootPath,
    ExtensionsPath,
    // IP Layer Parameters per Host (RFC 2132 §4)
    IpForwarding,
    NonLocalSourceRouting,
    PolicyFilter,
    MaximumDatagramAssemblySize,
    DefaultIpTtl,
    PathMtuAgingTimeout,
    PathMtuPlateauTable,
    // IP Layer Parameters per Interface (RFC 2132 §5)
    InterfaceMtu,
    AllSubnetsAreLocal,
    BroadcastAddress,
    PerformMaskDiscovery,
    MaskSupplier,
    PerformRouterDiscovery,
    RouterSolicitationAddress,
    StaticRoute,
    // Link Layer Parameters per Interface (RFC 2132 §6)
    TrailerEncapsulation,
    ArpCacheTimeout,
    EthernetEncapsulation,
    // TCP Parameters (RFC 2132 §7)
    DefaultTcpTtl,
    TcpKeepaliveInterval,
    TcpKeepaliveGarbage,
    // Application and Service Parameters (RFC 2132 §8)
    NisDomain,
    NisServers,
    NtpServers,
    VendorSpecificInformation,
    NetbiosNameServer,
    NetbiosDatagramDistributionServer,
    NetbiosNodeType,
    NetbiosScope,
    XWindowSystemFontServer,
    XWindowSystemDisplayManager,
    // DHCP Extensions (RFC 2132 §9)
    RequestedIpAddress,
    IpAddressLeaseTime,
    OptionOverload,
    MessageType,
    ServerIdentifier,
    ParameterRequestList,
    Message,
    MaximumMessageSize,
    RenewalTime,
    RebindingTime,
    ClassIdentifier,
    ClientIdentifier,

    /*
    RFC 2242
    */
    NetwareIpDomain,
    NetwareIpOption,

    /*
    RFC 2132 (continuation)
    */
    NisV3Domain,
    NisV3Servers,
    TftpServerName,
    BootfileName,
    HomeAgentAddresses,
    SmtpServers,
    Pop3Servers,
    NntpServers,
    WwwServers,
    FingerServers,
    IrcServers,
    StreetTalkServers,
    StdaServers,

    /*
    RFC 3004 (The User Class Option)
    */
    UserClass,

    /*
    RFC 3442 (The Classless Static Route Option)
    */
    ClasslessStaticRoute,

    End,

    Unknown(u8),
}

impl From<u8> for OptionCode {
    fn from(value: u8) -> Self {
        use self::OptionCode::*;
        match value {
            0 => Pad,
            1 => SubnetMask,
            2 => TimeOffset,
            3 => Router,
            4 => TimeServer,
            5 => NameServer,
            6 => DomainNameServer,
            7 => LogServer,
            8 => QuoteServer,
            9 => LprServer,
            10 => ImpressServer,
            11 => ResourceLocationServer,
            12 => HostName,
            13 => BootFileSize,
            14 => MeritDumpFile,
            15 => DomainName,
            16 => SwapServer,
            17 => RootPath,
            18 => ExtensionsPath,
            19 => IpForwarding,
            20 => NonLocalSourceRouting,
            21 => PolicyFilter,
            22 => MaximumDatagramAssemblySize,
            23 => DefaultIpTtl,
            24 => PathMtuAgingTimeout,
            25 => PathMtuPlateauTable,
            26 => InterfaceMtu,
            27 => AllSubnetsAreLocal,
            28 => BroadcastAddress,
            29 => PerformMaskDiscovery,
            30 => MaskSupplier,
            31 => PerformRouterDiscovery,
            32 => RouterSolicitationAddress,
            33 => StaticRoute,
            34 => TrailerEncapsulation,
            35 => ArpCacheTimeout,
            36 => EthernetEncapsulation,
            37 => DefaultTcpTtl,
            38 => TcpKeepaliveInterval,
            39 => TcpKeepaliveGarbage,
            40 => NisDomain,
            41 => NisServers,
            42 => NtpServers,
            43 => VendorSpecificInformation,
            44 => NetbiosNameServer,
            45 => NetbiosDatagramDistributionServer,
            46 => NetbiosNodeType,
            47 => NetbiosScope,
            48 => XWindowSystemFontServer,
            49 => XWindowSystemDisplayManager,
            50 => RequestedIpAddress,
            51 => IpAddressLeaseTime,
            52 => OptionOverload,
            53 => MessageType,
            54 => ServerIdentifier,
            55 => ParameterRequestList,
            56 => Message,
            57 => MaximumMessageSize,
            58 => RenewalTime,
            59 => RebindingTime,
            60 => ClassIdentifier,
            61 => ClientIdentifier,
            62 => NetwareIpDomain,
            63 => NetwareIpOption,
            64 => NisV3Domain,
            65 => NisV3Servers,
            66 => TftpServerName,
            67 => BootfileName,
            68 => HomeAgentAddresses,
            69 => SmtpServers,
            70 => Pop3Servers,
            71 => NntpServers,
            72 => WwwServers,
            73 => FingerServers,
            74 => IrcServers,
            75 => StreetTalkServers,
            76 => StdaServers,

            77 => UserClass,

            121 => ClasslessStaticRoute,

            255 => End,

            value => Unknown(value),
        }
    }
}

impl From<OptionCode> for u8 {
    fn from(value: OptionCode) -> Self {
        use self::OptionCode::*;
        match value {
            Pad => 0,
            SubnetMask => 1,
            TimeOffset => 2,
            Router => 3,
            TimeServer => 4,
            NameServer => 5,
            DomainNameServer => 6,
            LogServer => 7,
            QuoteServer => 8,
            LprServer => 9,
            ImpressServer => 10,
            ResourceLocationServer => 11,
            HostName => 12,
            BootFileSize => 13,
            MeritDumpFile => 14,
            DomainName => 15,
            SwapServer => 16,
            RootPath => 17,
            ExtensionsPath => 18,
            IpForwarding => 19,
            NonLocalSourceRouting => 20,
            PolicyFilter => 21,
            MaximumDatagramAssemblySize => 22,
            DefaultIpTtl => 23,
            PathMtuAgingTimeout => 24,
            PathMtuPlateauTable => 25,
            InterfaceMtu => 26,
            AllSubnetsAreLocal => 27,
            BroadcastAddress => 28,
            PerformMaskDiscovery => 29,
            MaskSupplier => 30,
            PerformRouterDiscovery => 31,
            RouterSolicitationAddress => 32,
            StaticRoute => 33,
            TrailerEncapsulation => 34,
            ArpCacheTimeout => 35,
            EthernetEncapsulation => 36,
            DefaultTcpTtl => 37,
            TcpKeepaliveInterval => 38,
            TcpKeepaliveGarbage => 39,
            NisDomain => 40,
            NisServers => 41,
            NtpServers => 42,
            VendorSpecificInformation => 43,
            NetbiosNameServer => 44,
            NetbiosDatagramDistributionServer => 45,
            NetbiosNodeType => 46,
            NetbiosScope => 47,
            XWindowSystemFontServer => 48,
            XWindowSystemDisplayManager => 49,
            RequestedIpAddress => 50,
            IpAddressLeaseTime => 51,
            OptionOverload => 52,
            MessageType => 53,
            ServerIdentifier => 54,
            ParameterRequestList => 55,
            Message => 56,
            MaximumMessageSize => 57,
            RenewalTime => 58,
            RebindingTime => 59,
            ClassIdentifier => 60,
            ClientIdentifier => 61,
            NetwareIpDomain => 62,
            NetwareIpOption => 63,
            NisV3Domain => 64,
            NisV3Servers => 65,
            TftpServerName => 66,
            BootfileName => 67,
            HomeAgentAddresses => 68,
            SmtpServers => 69,
            Pop3Servers => 70,
            NntpServers => 71,
            WwwServers => 72,
            FingerServers => 73,
            IrcServers => 74,
            StreetTalkServers => 75,
            StdaServers => 76,

            UserClass => 77,

            ClasslessStaticRoute => 121,

            End => 255,

            Unknown(value) => value,
        }
    }
}

impl fmt::Display for OptionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::OptionCode::*;
        match self {
            Unknown(_) => write!(f, "Unknown"),
            code => write!(f, "{:?}", code),
        }
    }
}
