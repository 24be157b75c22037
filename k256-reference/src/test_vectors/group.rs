//! Test vectors for the secp256k1 group.

/// Repeated addition of the generator.
///
/// These are the first 16 elements of the series starting with `1G`, each
/// pair being the big-endian hex encoding of `(x, y)`.
pub const ADD_TEST_VECTORS: &[(&str, &str)] = &[
    (
        "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    ),
    (
        "C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5",
        "1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A",
    ),
    (
        "F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
        "388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672",
    ),
    (
        "E493DBF1C10D80F3581E4904930B1404CC6C13900EE0758474FA94ABE8C4CD13",
        "51ED993EA0D455B75642E2098EA51448D967AE33BFBDFE40CFE97BDC47739922",
    ),
    (
        "2F8BDE4D1A07209355B4A7250A5C5128E88B84BDDC619AB7CBA8D569B240EFE4",
        "D8AC222636E5E3D6D4DBA9DDA6C9C426F788271BAB0D6840DCA87D3AA6AC62D6",
    ),
    (
        "FFF97BD5755EEEA420453A14355235D382F6472F8568A18B2F057A1460297556",
        "AE12777AACFBB620F3BE96017F45C560DE80F0F6518FE4A03C870C36B075F297",
    ),
    (
        "5CBDF0646E5DB4EAA398F365F2EA7A0E3D419B7E0330E39CE92BDDEDCAC4F9BC",
        "6AEBCA40BA255960A3178D6D861A54DBA813D0B813FDE7B5A5082628087264DA",
    ),
    (
        "2F01E5E15CCA351DAFF3843FB70F3C2F0A1BDD05E5AF888A67784EF3E10A2A01",
        "5C4DA8A741539949293D082A132D13B4C2E213D6BA5B7617B5DA2CB76CBDE904",
    ),
    (
        "ACD484E2F0C7F65309AD178A9F559ABDE09796974C57E714C35F110DFC27CCBE",
        "CC338921B0A7D9FD64380971763B61E9ADD888A4375F8E0F05CC262AC64F9C37",
    ),
    (
        "A0434D9E47F3C86235477C7B1AE6AE5D3442D49B1943C2B752A68E2A47E247C7",
        "893ABA425419BC27A3B6C7E693A24C696F794C2ED877A1593CBEE53B037368D7",
    ),
    (
        "774AE7F858A9411E5EF4246B70C65AAC5649980BE5C17891BBEC17895DA008CB",
        "D984A032EB6B5E190243DD56D7B7B365372DB1E2DFF9D6A8301D74C9C953C61B",
    ),
    (
        "D01115D548E7561B15C38F004D734633687CF4419620095BC5B0F47070AFE85A",
        "A9F34FFDC815E0D7A8B64537E17BD81579238C5DD9A86D526B051B13F4062327",
    ),
    (
        "F28773C2D975288BC7D1D205C3748651B075FBC6610E58CDDEEDDF8F19405AA8",
        "0AB0902E8D880A89758212EB65CDAF473A1A06DA521FA91F29B5CB52DB03ED81",
    ),
    (
        "499FDF9E895E719CFD64E67F07D38E3226AA7B63678949E6E49B241A60E823E4",
        "CAC2F6C4B54E855190F044E4A7B3D464464279C27A3F95BCC65F40D403A13F5B",
    ),
    (
        "D7924D4F7D43EA965A465AE3095FF41131E5946F3C85F79E44ADBCF8E27E080E",
        "581E2872A86C72A683842EC228CC6DEFEA40AF2BD896D3A5C504DC9FF6A26B58",
    ),
    (
        "E60FCE93B59E9EC53011AABC21C23E97B2A31369B87A5AE9C44EE89E2A6DEC0A",
        "F7E3507399E595929DB99F34F57937101296891E44D23F0BE1F32CCE69616821",
    ),
];
