//! Reusable compliance documents

/// Module-shipped profiles and checks for an ssh module
pub const SSH_PROFILES: &str = r#"---
version: 2.0.0
profiles:
  disa_stig:
    controls:
      AC-17: true
  nist_800_53:
    ces:
      ssh_banner: true
ce:
  ssh_banner:
    controls:
      AC-8: true
checks:
  oval:ssh_permit_root:
    type: puppet-class-parameter
    controls:
      AC-17: true
    identifiers:
      disa_stig:
        - V-72247
    settings:
      parameter: ssh::server::conf::permitrootlogin
      value: false
  oval:ssh_banner:
    type: puppet-class-parameter
    ces:
      - ssh_banner
    settings:
      parameter: ssh::server::conf::banner
      value: /etc/issue.net
  oval:ssh_ciphers_el7:
    type: puppet-class-parameter
    controls:
      AC-17: true
    confine:
      os.release.major: '7'
      module_name: simp-ssh
      module_version: '>= 6.0.0 < 7.0.0'
    settings:
      parameter: ssh::server::conf::ciphers
      value:
        - aes256-ctr
  oval:ssh_ciphers_el8:
    type: puppet-class-parameter
    controls:
      AC-17: true
    confine:
      os.release.major: '8'
    settings:
      parameter: ssh::server::conf::ciphers
      value:
        - aes256-gcm@openssh.com
"#;

/// Site overrides loaded from the compliance data directory
pub const SITE_OVERRIDES: &str = r#"{
  "version": "2.0.0",
  "checks": {
    "--oval:ssh_banner": {},
    "oval:site_root": {
      "type": "puppet-class-parameter",
      "settings": {
        "parameter": "ssh::server::conf::permitrootlogin",
        "value": true
      }
    }
  },
  "profiles": {
    "site": {
      "checks": {"oval:site_root": true}
    }
  }
}
"#;
